use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{db::review::get_stats, models::stats::ReviewStats, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub business_id: Option<String>,
}

pub async fn get_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Vec<ReviewStats>>, (StatusCode, String)> {
    match get_stats(query.business_id, state.redis.clone()).await {
        Ok(stats) => Ok(Json(stats)),
        Err(err) => {
            tracing::error!("Error computing review stats: {}", err);
            Err(err.to_response())
        }
    }
}
