use std::sync::Arc;

use crate::db::business::BusinessDirectory;
use crate::db::store;
use crate::errors::AppError;
use crate::models::Review;
use crate::models::review::SubmitReviewPayload;
use crate::reviews::validate::{sanitize_submission, validate_submission};
use crate::state::{CollectionLock, RedisClient};

pub async fn submit_review(
    payload: SubmitReviewPayload,
    redis: RedisClient,
    lock: CollectionLock,
    directory: Arc<dyn BusinessDirectory>,
) -> Result<Review, AppError> {
    validate_submission(&payload)?;
    let business = directory.resolve(&payload.business_id).await?;
    let review = Review::from_submission(sanitize_submission(payload), &business);

    store::update_collection(&redis, &lock, |reviews| {
        reviews.push(review.clone());
        Ok(())
    })
    .await?;

    Ok(review)
}
