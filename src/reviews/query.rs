use crate::models::review::{Review, ReviewFilter, ReviewPage, ReviewSort, ReviewStatus};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Public listing: approved reviews only, regardless of filter combination.
/// Moderation hides records at query time, it never deletes them.
pub fn page_reviews(mut reviews: Vec<Review>, filter: &ReviewFilter) -> ReviewPage {
    reviews.retain(|r| r.status == ReviewStatus::Approved);
    if let Some(business_id) = &filter.business_id {
        reviews.retain(|r| &r.business_id == business_id);
    }
    if let Some(category) = &filter.category {
        reviews.retain(|r| r.business_category.eq_ignore_ascii_case(category));
    }
    if let Some(neighborhood) = &filter.neighborhood {
        reviews.retain(|r| r.business_neighborhood.eq_ignore_ascii_case(neighborhood));
    }
    if let Some(rating) = filter.rating {
        reviews.retain(|r| r.rating == rating);
    }
    if let Some(verified) = filter.verified {
        reviews.retain(|r| r.verified == verified);
    }

    match filter.sort_by {
        ReviewSort::Newest => reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ReviewSort::Oldest => reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ReviewSort::Highest => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSort::Lowest => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
        ReviewSort::Helpful => reviews.sort_by(|a, b| b.helpfulness().cmp(&a.helpfulness())),
    }

    let total = reviews.len();
    let limit = filter
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = filter.offset.unwrap_or(0);
    let items: Vec<Review> = reviews.into_iter().skip(offset).take(limit).collect();

    ReviewPage {
        items,
        total,
        page: offset / limit + 1,
        limit,
        total_pages: total.div_ceil(limit),
    }
}
