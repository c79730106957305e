use chrono::Utc;

use crate::errors::AppError;
use crate::models::review::{Review, ReviewResponse, ReviewStatus};
use crate::reviews::validate::{sanitize, validate_response_content};

/// Attaches the business's single reply to an approved review. The caller
/// has already located the review; unknown ids never reach this function.
pub fn attach_response(
    review: &mut Review,
    business_id: &str,
    content: &str,
) -> Result<ReviewResponse, AppError> {
    validate_response_content(content)?;
    if review.business_id != business_id {
        return Err(AppError::Forbidden(
            "Review belongs to a different business".into(),
        ));
    }
    if review.status != ReviewStatus::Approved {
        return Err(AppError::Forbidden(
            "Only approved reviews can receive a response".into(),
        ));
    }
    if review.response.is_some() {
        return Err(AppError::Conflict("Review already has a response".into()));
    }
    let response = ReviewResponse::new(review, sanitize(content));
    review.updated_at = response.created_at;
    review.response = Some(response.clone());
    Ok(response)
}

pub fn update_response(
    review: &mut Review,
    business_id: &str,
    content: &str,
) -> Result<ReviewResponse, AppError> {
    validate_response_content(content)?;
    if review.business_id != business_id {
        return Err(AppError::Forbidden(
            "Review belongs to a different business".into(),
        ));
    }
    let now = Utc::now();
    let response = review
        .response
        .as_mut()
        .ok_or_else(|| AppError::NotFound("Review has no response".into()))?;
    response.content = sanitize(content);
    response.updated_at = now;
    let updated = response.clone();
    review.updated_at = now;
    Ok(updated)
}

pub fn detach_response(review: &mut Review, business_id: &str) -> Result<(), AppError> {
    if review.business_id != business_id {
        return Err(AppError::Forbidden(
            "Review belongs to a different business".into(),
        ));
    }
    if review.response.take().is_none() {
        return Err(AppError::NotFound("Review has no response".into()));
    }
    review.updated_at = Utc::now();
    Ok(())
}
