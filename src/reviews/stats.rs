use std::collections::BTreeMap;

use chrono::Utc;

use crate::models::review::{Review, ReviewStatus};
use crate::models::stats::ReviewStats;
use crate::reviews::validate::{RATING_MAX, RATING_MIN};

/// Pure fold over the approved review set. Order-independent: nothing here
/// depends on iteration order, so recomputation is always idempotent.
///
/// With a business id the result is that single business (zeroed when it has
/// no approved reviews); without one, one entry per business that has any.
pub fn compute_stats(reviews: &[Review], business_id: Option<&str>) -> Vec<ReviewStats> {
    let approved = reviews.iter().filter(|r| r.status == ReviewStatus::Approved);

    let mut groups: BTreeMap<&str, Vec<&Review>> = BTreeMap::new();
    match business_id {
        Some(id) => {
            groups.insert(id, approved.filter(|r| r.business_id == id).collect());
        }
        None => {
            for review in approved {
                groups
                    .entry(review.business_id.as_str())
                    .or_default()
                    .push(review);
            }
        }
    }

    groups
        .into_iter()
        .map(|(id, group)| stats_for(id, &group))
        .collect()
}

fn stats_for(business_id: &str, reviews: &[&Review]) -> ReviewStats {
    let total = reviews.len();
    let mut distribution: BTreeMap<i16, usize> =
        (RATING_MIN..=RATING_MAX).map(|rating| (rating, 0)).collect();
    let mut rating_sum: i64 = 0;
    let mut verified = 0;
    let mut responded = 0;

    for review in reviews {
        rating_sum += i64::from(review.rating);
        *distribution.entry(review.rating).or_insert(0) += 1;
        if review.verified {
            verified += 1;
        }
        if review.response.is_some() {
            responded += 1;
        }
    }

    let average_rating = if total == 0 {
        0.0
    } else {
        round2(rating_sum as f64 / total as f64)
    };
    let recommended = distribution.get(&4).copied().unwrap_or(0)
        + distribution.get(&5).copied().unwrap_or(0);

    ReviewStats {
        business_id: Some(business_id.to_string()),
        total_reviews: total,
        average_rating,
        rating_distribution: distribution,
        recommended_percentage: percentage(recommended, total),
        verified_reviews: verified,
        response_rate: percentage(responded, total),
        updated_at: Utc::now(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
