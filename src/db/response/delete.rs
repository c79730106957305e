use uuid::Uuid;

use crate::db::review::find_review_mut;
use crate::db::store;
use crate::errors::AppError;
use crate::reviews::respond::detach_response;
use crate::state::{CollectionLock, RedisClient};

pub async fn remove_response(
    review_id: Uuid,
    business_id: String,
    redis: RedisClient,
    lock: CollectionLock,
) -> Result<(), AppError> {
    store::update_collection(&redis, &lock, |reviews| {
        let review = find_review_mut(reviews, review_id)?;
        detach_response(review, &business_id)
    })
    .await
}
