use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::review::Review;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Google,
    Yelp,
    Facebook,
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReviewSource::Google => "google",
            ReviewSource::Yelp => "yelp",
            ReviewSource::Facebook => "facebook",
        })
    }
}

/// Staging shape for a review harvested from a third-party platform. Either
/// converted into a [`Review`] or discarded as a duplicate, never stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedReview {
    pub external_id: Option<String>,
    pub rating: i16,
    pub title: Option<String>,
    pub content: String,
    pub author_name: String,
    pub date: DateTime<Utc>,
    pub response: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub reviews: Vec<Review>,
}
