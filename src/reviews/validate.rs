use thiserror::Error;

use crate::models::review::SubmitReviewPayload;

pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;
pub const TITLE_MAX_LEN: usize = 150;
pub const CONTENT_MIN_LEN: usize = 10;
pub const CONTENT_MAX_LEN: usize = 5000;
pub const RESPONSE_MIN_LEN: usize = 10;
pub const RESPONSE_MAX_LEN: usize = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Rating must be between {RATING_MIN} and {RATING_MAX}, got {0}")]
    OutOfRange(i16),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub fn validate_submission(payload: &SubmitReviewPayload) -> Result<(), ValidationError> {
    if payload.business_id.trim().is_empty() {
        return Err(ValidationError::MissingField("businessId"));
    }
    if payload.user_name.trim().is_empty() {
        return Err(ValidationError::MissingField("userName"));
    }
    if payload.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    if payload.content.trim().is_empty() {
        return Err(ValidationError::MissingField("content"));
    }
    if !(RATING_MIN..=RATING_MAX).contains(&payload.rating) {
        return Err(ValidationError::OutOfRange(payload.rating));
    }
    if payload.title.chars().count() > TITLE_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "title",
            max: TITLE_MAX_LEN,
        });
    }
    let content_len = payload.content.trim().chars().count();
    if content_len < CONTENT_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "content",
            min: CONTENT_MIN_LEN,
        });
    }
    if content_len > CONTENT_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "content",
            max: CONTENT_MAX_LEN,
        });
    }
    Ok(())
}

pub fn validate_response_content(content: &str) -> Result<(), ValidationError> {
    let len = content.trim().chars().count();
    if len < RESPONSE_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "content",
            min: RESPONSE_MIN_LEN,
        });
    }
    if len > RESPONSE_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "content",
            max: RESPONSE_MAX_LEN,
        });
    }
    Ok(())
}

/// User text is trimmed and HTML-escaped at write time.
pub fn sanitize(text: &str) -> String {
    html_escape::encode_text(text.trim()).into_owned()
}

pub fn sanitize_submission(payload: SubmitReviewPayload) -> SubmitReviewPayload {
    SubmitReviewPayload {
        business_id: payload.business_id,
        user_name: sanitize(&payload.user_name),
        user_email: payload.user_email,
        rating: payload.rating,
        title: sanitize(&payload.title),
        content: sanitize(&payload.content),
        pros: payload
            .pros
            .map(|items| items.iter().map(|s| sanitize(s)).collect()),
        cons: payload
            .cons
            .map(|items| items.iter().map(|s| sanitize(s)).collect()),
        images: payload.images,
    }
}
