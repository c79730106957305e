use serde::{Deserialize, Serialize};

/// The slice of a business record the review ledger denormalizes into each
/// review. The directory owning the full records is external to this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub neighborhood: String,
}
