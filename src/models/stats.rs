use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived reputation view. Never persisted, always recomputed from the
/// approved review set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub business_id: Option<String>,
    pub total_reviews: usize,
    pub average_rating: f64,
    pub rating_distribution: BTreeMap<i16, usize>,
    pub recommended_percentage: u32,
    pub verified_reviews: usize,
    pub response_rate: u32,
    pub updated_at: DateTime<Utc>,
}
