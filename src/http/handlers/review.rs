use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::review::{list_reviews, moderate_review, submit_review, vote_review},
    models::Review,
    models::review::{ReviewFilter, ReviewPage, ReviewStatus, SubmitReviewPayload},
    state::AppState,
};

pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Json<ReviewPage>, (StatusCode, String)> {
    match list_reviews(filter, state.redis.clone()).await {
        Ok(page) => Ok(Json(page)),
        Err(err) => {
            tracing::error!("Error listing reviews: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn submit_review_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitReviewPayload>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    match submit_review(
        payload,
        state.redis.clone(),
        state.collection_lock.clone(),
        state.directory.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!(
                "Review {} submitted for business {}",
                review.id,
                review.business_id
            );
            Ok((StatusCode::CREATED, Json(review)))
        }
        Err(err) => {
            tracing::error!("Error submitting review: {}", err);
            Err(err.to_response())
        }
    }
}

#[derive(Deserialize)]
pub struct ModerateReviewPayload {
    pub status: ReviewStatus,
}

pub async fn moderate_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<ModerateReviewPayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    match moderate_review(
        review_id,
        payload.status,
        state.redis.clone(),
        state.collection_lock.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!("Review {} moderated to {}", review.id, review.status);
            Ok(Json(review))
        }
        Err(err) => {
            tracing::error!("Error moderating review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}

#[derive(Deserialize)]
pub struct VotePayload {
    pub helpful: bool,
}

pub async fn vote_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<VotePayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    match vote_review(
        review_id,
        payload.helpful,
        state.redis.clone(),
        state.collection_lock.clone(),
    )
    .await
    {
        Ok(review) => Ok(Json(review)),
        Err(err) => {
            tracing::error!("Error voting on review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}
