use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    db::review::import_reviews,
    models::imported::{ImportReport, ImportedReview, ReviewSource},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    pub business_id: String,
    pub source: ReviewSource,
    pub items: Vec<ImportedReview>,
}

pub async fn import_reviews_handler(
    State(state): State<AppState>,
    Json(payload): Json<ImportPayload>,
) -> Result<Json<ImportReport>, (StatusCode, String)> {
    let business_id = payload.business_id.clone();
    match import_reviews(
        payload.business_id,
        payload.source,
        payload.items,
        state.redis.clone(),
        state.collection_lock.clone(),
        state.directory.clone(),
    )
    .await
    {
        Ok(report) => {
            tracing::info!(
                "Imported {} reviews for business {} ({} skipped, {} errors)",
                report.imported,
                business_id,
                report.skipped,
                report.errors.len()
            );
            Ok(Json(report))
        }
        Err(err) => {
            tracing::error!("Error importing reviews for business {}: {}", business_id, err);
            Err(err.to_response())
        }
    }
}
