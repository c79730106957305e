use std::collections::HashSet;

use uuid::Uuid;

use crate::models::business::BusinessSummary;
use crate::models::imported::{ImportReport, ImportedReview, ReviewSource};
use crate::models::review::{Review, ReviewResponse, ReviewStatus};
use crate::reviews::validate::{RATING_MAX, RATING_MIN, ValidationError, sanitize};

pub fn dedup_key(source: ReviewSource, external_id: &str) -> String {
    format!("{source}:{external_id}")
}

/// Identities of every imported review already stored for this business.
/// User-submitted reviews carry no source and never participate in dedup.
fn known_keys(reviews: &[Review], business_id: &str) -> HashSet<String> {
    reviews
        .iter()
        .filter(|r| r.business_id == business_id)
        .filter_map(|r| match (r.source, r.external_id.as_deref()) {
            (Some(source), Some(external_id)) => Some(dedup_key(source, external_id)),
            _ => None,
        })
        .collect()
}

/// Ingests one harvested batch into the collection. Item failures are
/// collected, never raised: the batch always runs to completion and the
/// report carries partial counts. The caller persists the whole collection
/// in one write-back afterwards.
pub fn import_batch(
    reviews: &mut Vec<Review>,
    business: &BusinessSummary,
    source: ReviewSource,
    items: &[ImportedReview],
) -> ImportReport {
    let mut known = known_keys(reviews, &business.id);
    let mut report = ImportReport::default();

    for (index, item) in items.iter().enumerate() {
        // No timestamp fallback: without a stable external id there is no
        // identity to dedup on, so the item is refused.
        let Some(external_id) = item
            .external_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        else {
            report
                .errors
                .push(format!("item {index}: missing a stable externalId"));
            continue;
        };

        let key = dedup_key(source, external_id);
        if known.contains(&key) {
            report.skipped += 1;
            continue;
        }

        match map_imported(item, source, business) {
            Ok(review) => {
                known.insert(key);
                report.imported += 1;
                report.reviews.push(review.clone());
                reviews.push(review);
            }
            Err(err) => report.errors.push(format!("item {index}: {err}")),
        }
    }

    report
}

/// Converts one staged item into a stored review. Imported content is
/// pre-moderated by the source platform, so it enters approved.
pub fn map_imported(
    item: &ImportedReview,
    source: ReviewSource,
    business: &BusinessSummary,
) -> Result<Review, ValidationError> {
    if !(RATING_MIN..=RATING_MAX).contains(&item.rating) {
        return Err(ValidationError::OutOfRange(item.rating));
    }
    if item.content.trim().is_empty() {
        return Err(ValidationError::MissingField("content"));
    }
    if item.author_name.trim().is_empty() {
        return Err(ValidationError::MissingField("authorName"));
    }

    let mut review = Review {
        id: Uuid::new_v4(),
        business_id: business.id.clone(),
        business_name: business.name.clone(),
        business_category: business.category.clone(),
        business_neighborhood: business.neighborhood.clone(),
        user_name: sanitize(&item.author_name),
        user_email: None,
        rating: item.rating,
        title: item
            .title
            .as_deref()
            .map(sanitize)
            .unwrap_or_else(|| format!("Review from {source}")),
        content: sanitize(&item.content),
        pros: None,
        cons: None,
        images: None,
        verified: item.verified,
        helpful: 0,
        not_helpful: 0,
        status: ReviewStatus::Approved,
        response: None,
        source: Some(source),
        external_id: item.external_id.as_deref().map(|id| id.trim().to_string()),
        created_at: item.date,
        updated_at: item.date,
    };

    if let Some(text) = &item.response {
        review.response = Some(ReviewResponse::imported(&review, sanitize(text)));
    }

    Ok(review)
}
