use axum::{Json, extract::State, http::StatusCode};

use crate::{db::business::upsert_business, models::business::BusinessSummary, state::AppState};

pub async fn upsert_business_handler(
    State(state): State<AppState>,
    Json(payload): Json<BusinessSummary>,
) -> Result<Json<BusinessSummary>, (StatusCode, String)> {
    match upsert_business(payload, state.redis.clone()).await {
        Ok(summary) => {
            tracing::info!("Business {} upserted", summary.id);
            Ok(Json(summary))
        }
        Err(err) => {
            tracing::error!("Error upserting business: {}", err);
            Err(err.to_response())
        }
    }
}
