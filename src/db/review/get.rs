use crate::db::store;
use crate::errors::AppError;
use crate::models::review::{ReviewFilter, ReviewPage};
use crate::models::stats::ReviewStats;
use crate::reviews::query::page_reviews;
use crate::reviews::stats::compute_stats;
use crate::state::RedisClient;

pub async fn list_reviews(filter: ReviewFilter, redis: RedisClient) -> Result<ReviewPage, AppError> {
    let reviews = store::load_reviews(&redis).await?;
    Ok(page_reviews(reviews, &filter))
}

pub async fn get_stats(
    business_id: Option<String>,
    redis: RedisClient,
) -> Result<Vec<ReviewStats>, AppError> {
    let reviews = store::load_reviews(&redis).await?;
    Ok(compute_stats(&reviews, business_id.as_deref()))
}
