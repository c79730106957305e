use uuid::Uuid;

use crate::db::review::find_review_mut;
use crate::db::store;
use crate::errors::AppError;
use crate::models::review::ReviewResponse;
use crate::reviews::respond::update_response;
use crate::state::{CollectionLock, RedisClient};

pub async fn edit_response(
    review_id: Uuid,
    business_id: String,
    content: String,
    redis: RedisClient,
    lock: CollectionLock,
) -> Result<ReviewResponse, AppError> {
    store::update_collection(&redis, &lock, |reviews| {
        let review = find_review_mut(reviews, review_id)?;
        update_response(review, &business_id, &content)
    })
    .await
}
