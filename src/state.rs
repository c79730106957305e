use std::sync::Arc;

use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use tokio::sync::Mutex;

use crate::db::business::BusinessDirectory;

#[derive(Clone)]
pub struct AppState {
    pub redis: RedisClient,
    pub collection_lock: CollectionLock,
    pub directory: Arc<dyn BusinessDirectory>,
}

pub type RedisClient = Pool<RedisConnectionManager>;

// The review collection is a single document rewritten on every mutation;
// this lock serializes the read-modify-write cycles so concurrent writers
// cannot silently drop each other's changes.
pub type CollectionLock = Arc<Mutex<()>>;
