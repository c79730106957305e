use uuid::Uuid;

use crate::db::review::find_review_mut;
use crate::db::store;
use crate::errors::AppError;
use crate::models::Review;
use crate::models::review::ReviewStatus;
use crate::state::{CollectionLock, RedisClient};

pub async fn moderate_review(
    review_id: Uuid,
    status: ReviewStatus,
    redis: RedisClient,
    lock: CollectionLock,
) -> Result<Review, AppError> {
    store::update_collection(&redis, &lock, |reviews| {
        let review = find_review_mut(reviews, review_id)?;
        review.transition(status)?;
        Ok(review.clone())
    })
    .await
}

pub async fn vote_review(
    review_id: Uuid,
    helpful: bool,
    redis: RedisClient,
    lock: CollectionLock,
) -> Result<Review, AppError> {
    store::update_collection(&redis, &lock, |reviews| {
        let review = find_review_mut(reviews, review_id)?;
        review.vote(helpful)?;
        Ok(review.clone())
    })
    .await
}
