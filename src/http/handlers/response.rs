use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    db::response::{add_response, edit_response, remove_response},
    models::review::ReviewResponse,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondPayload {
    pub business_id: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOwnerPayload {
    pub business_id: String,
}

pub async fn add_response_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<RespondPayload>,
) -> Result<(StatusCode, Json<ReviewResponse>), (StatusCode, String)> {
    match add_response(
        review_id,
        payload.business_id,
        payload.content,
        state.redis.clone(),
        state.collection_lock.clone(),
    )
    .await
    {
        Ok(response) => {
            tracing::info!(
                "Business {} responded to review {}",
                response.business_id,
                review_id
            );
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(err) => {
            tracing::error!("Error adding response to review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn update_response_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<RespondPayload>,
) -> Result<Json<ReviewResponse>, (StatusCode, String)> {
    match edit_response(
        review_id,
        payload.business_id,
        payload.content,
        state.redis.clone(),
        state.collection_lock.clone(),
    )
    .await
    {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::error!("Error updating response on review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_response_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<ResponseOwnerPayload>,
) -> Result<Json<Value>, (StatusCode, String)> {
    match remove_response(
        review_id,
        payload.business_id,
        state.redis.clone(),
        state.collection_lock.clone(),
    )
    .await
    {
        Ok(()) => Ok(Json(json!({ "deleted": true }))),
        Err(err) => {
            tracing::error!("Error deleting response on review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}
