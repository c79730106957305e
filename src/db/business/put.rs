use redis::AsyncCommands;

use crate::db::business::get::business_key;
use crate::db::store;
use crate::errors::AppError;
use crate::models::business::BusinessSummary;
use crate::reviews::validate::ValidationError;
use crate::state::RedisClient;

pub async fn upsert_business(
    summary: BusinessSummary,
    redis: RedisClient,
) -> Result<BusinessSummary, AppError> {
    if summary.id.trim().is_empty() {
        return Err(ValidationError::MissingField("id").into());
    }
    if summary.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }

    let mut conn = store::connection(&redis).await?;
    let json =
        serde_json::to_string(&summary).map_err(|e| AppError::Serialization(e.to_string()))?;

    let _: () = conn
        .set(business_key(&summary.id), json)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(summary)
}
