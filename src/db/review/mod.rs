pub mod get;
pub mod import;
pub mod patch;
pub mod post;

pub use get::{get_stats, list_reviews};
pub use import::import_reviews;
pub use patch::{moderate_review, vote_review};
pub use post::submit_review;

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Review;

pub(crate) fn find_review_mut(
    reviews: &mut [Review],
    review_id: Uuid,
) -> Result<&mut Review, AppError> {
    reviews
        .iter_mut()
        .find(|r| r.id == review_id)
        .ok_or_else(|| AppError::NotFound(format!("Review {review_id} not found")))
}
