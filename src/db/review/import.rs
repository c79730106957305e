use std::sync::Arc;

use crate::db::business::BusinessDirectory;
use crate::db::store;
use crate::errors::AppError;
use crate::models::imported::{ImportReport, ImportedReview, ReviewSource};
use crate::reviews::import::import_batch;
use crate::state::{CollectionLock, RedisClient};

pub async fn import_reviews(
    business_id: String,
    source: ReviewSource,
    items: Vec<ImportedReview>,
    redis: RedisClient,
    lock: CollectionLock,
    directory: Arc<dyn BusinessDirectory>,
) -> Result<ImportReport, AppError> {
    let business = match directory.resolve(&business_id).await {
        Ok(business) => business,
        // The batch shares one business id; when it cannot be resolved the
        // batch still completes, with the failure collected instead of raised.
        Err(AppError::NotFound(msg)) => {
            return Ok(ImportReport {
                errors: vec![msg],
                ..Default::default()
            });
        }
        Err(err) => return Err(err),
    };

    store::update_collection(&redis, &lock, |reviews| {
        Ok(import_batch(reviews, &business, source, &items))
    })
    .await
}
