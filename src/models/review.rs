use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::business::BusinessSummary;
use crate::models::imported::ReviewSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Hidden,
    Rejected,
}

impl ReviewStatus {
    /// The complete moderation transition table. `Rejected` is terminal,
    /// `Hidden` is always reversible.
    pub fn can_transition_to(self, next: ReviewStatus) -> bool {
        use ReviewStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Hidden) | (Hidden, Approved)
        )
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Hidden => "hidden",
            ReviewStatus::Rejected => "rejected",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub business_id: String,
    // Captured from the directory at creation time, not re-synced afterwards.
    pub business_name: String,
    pub business_category: String,
    pub business_neighborhood: String,
    pub user_name: String,
    pub user_email: Option<String>,
    pub rating: i16,
    pub title: String,
    pub content: String,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub verified: bool,
    pub helpful: u32,
    pub not_helpful: u32,
    pub status: ReviewStatus,
    pub response: Option<ReviewResponse>,
    pub source: Option<ReviewSource>,
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Applies a moderation action. Illegal transitions fail without
    /// touching the record.
    pub fn transition(&mut self, next: ReviewStatus) -> Result<(), AppError> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Readers can only vote on reviews they can see, which means approved ones.
    pub fn vote(&mut self, helpful: bool) -> Result<(), AppError> {
        if self.status != ReviewStatus::Approved {
            return Err(AppError::Forbidden(
                "Only approved reviews accept votes".into(),
            ));
        }
        if helpful {
            self.helpful += 1;
        } else {
            self.not_helpful += 1;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn helpfulness(&self) -> i64 {
        i64::from(self.helpful) - i64::from(self.not_helpful)
    }

    pub fn from_submission(payload: SubmitReviewPayload, business: &BusinessSummary) -> Self {
        let now = Utc::now();
        Review {
            id: Uuid::new_v4(),
            business_id: business.id.clone(),
            business_name: business.name.clone(),
            business_category: business.category.clone(),
            business_neighborhood: business.neighborhood.clone(),
            user_name: payload.user_name,
            user_email: payload.user_email,
            rating: payload.rating,
            title: payload.title,
            content: payload.content,
            pros: payload.pros,
            cons: payload.cons,
            images: payload.images,
            verified: false,
            helpful: 0,
            not_helpful: 0,
            status: ReviewStatus::Pending,
            response: None,
            source: None,
            external_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub review_id: Uuid,
    pub business_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewResponse {
    pub fn new(review: &Review, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            review_id: review.id,
            business_id: review.business_id.clone(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Import-only constructor: the source platform ships the business reply
    /// alongside the review, dated one day after it. Skips the user-facing
    /// ownership checks in `reviews::respond`.
    pub fn imported(review: &Review, content: String) -> Self {
        let created = review.created_at + chrono::Duration::days(1);
        Self {
            id: Uuid::new_v4(),
            review_id: review.id,
            business_id: review.business_id.clone(),
            content,
            created_at: created,
            updated_at: created,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewPayload {
    pub business_id: String,
    pub user_name: String,
    pub user_email: Option<String>,
    pub rating: i16,
    pub title: String,
    pub content: String,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
    Helpful,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewFilter {
    pub business_id: Option<String>,
    pub category: Option<String>,
    pub neighborhood: Option<String>,
    pub rating: Option<i16>,
    pub verified: Option<bool>,
    pub sort_by: ReviewSort,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub items: Vec<Review>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
