use bb8::PooledConnection;
use bb8_redis::RedisConnectionManager;
use redis::AsyncCommands;

use crate::errors::AppError;
use crate::models::Review;
use crate::state::{CollectionLock, RedisClient};

// The whole review ledger is one JSON document, rewritten on every mutation.
const REVIEWS_KEY: &str = "reviews:all";

pub async fn connection(
    redis: &RedisClient,
) -> Result<PooledConnection<'_, RedisConnectionManager>, AppError> {
    redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })
}

pub async fn load_reviews(redis: &RedisClient) -> Result<Vec<Review>, AppError> {
    let mut conn = connection(redis).await?;
    let json: Option<String> = conn
        .get(REVIEWS_KEY)
        .await
        .map_err(AppError::RedisCommandError)?;

    match json {
        Some(json) => {
            serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()))
        }
        None => Ok(Vec::new()),
    }
}

pub async fn save_reviews(reviews: &[Review], redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = connection(redis).await?;
    let json =
        serde_json::to_string(reviews).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = conn
        .set(REVIEWS_KEY, json)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}

/// Guarded read-modify-write over the collection. The lock serializes
/// concurrent writers so one save cannot clobber another's changes; an error
/// from `mutate` persists nothing.
pub async fn update_collection<T, F>(
    redis: &RedisClient,
    lock: &CollectionLock,
    mutate: F,
) -> Result<T, AppError>
where
    F: FnOnce(&mut Vec<Review>) -> Result<T, AppError>,
{
    let _guard = lock.lock().await;
    let mut reviews = load_reviews(redis).await?;
    let result = mutate(&mut reviews)?;
    save_reviews(&reviews, redis).await?;
    Ok(result)
}
