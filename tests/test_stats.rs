use chrono::Utc;
use localspot_be::models::review::{Review, ReviewResponse, ReviewStatus};
use localspot_be::reviews::stats::compute_stats;
use uuid::Uuid;

fn review_for(business_id: &str, rating: i16, status: ReviewStatus) -> Review {
    let now = Utc::now();
    Review {
        id: Uuid::new_v4(),
        business_id: business_id.to_string(),
        business_name: "Blue Door Cafe".to_string(),
        business_category: "cafe".to_string(),
        business_neighborhood: "Riverside".to_string(),
        user_name: "Dana".to_string(),
        user_email: None,
        rating,
        title: "Great".to_string(),
        content: "Loved it, ten chars min".to_string(),
        pros: None,
        cons: None,
        images: None,
        verified: false,
        helpful: 0,
        not_helpful: 0,
        status,
        response: None,
        source: None,
        external_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn with_response(mut review: Review) -> Review {
    let response = ReviewResponse::new(&review, "Thanks for stopping by!".to_string());
    review.response = Some(response);
    review
}

#[test]
fn test_single_five_star_review() {
    let reviews = vec![review_for("b1", 5, ReviewStatus::Approved)];
    let stats = compute_stats(&reviews, Some("b1"));

    assert_eq!(stats.len(), 1);
    let s = &stats[0];
    assert_eq!(s.business_id.as_deref(), Some("b1"));
    assert_eq!(s.total_reviews, 1);
    assert_eq!(s.average_rating, 5.0);
    assert_eq!(s.rating_distribution[&5], 1);
    assert_eq!(s.rating_distribution[&1], 0);
    assert_eq!(s.recommended_percentage, 100);
    assert_eq!(s.response_rate, 0);
    assert_eq!(s.verified_reviews, 0);
}

#[test]
fn test_average_and_recommended_percentage() {
    let reviews = vec![
        review_for("b1", 3, ReviewStatus::Approved),
        review_for("b1", 5, ReviewStatus::Approved),
    ];
    let stats = compute_stats(&reviews, Some("b1"));

    let s = &stats[0];
    assert_eq!(s.total_reviews, 2);
    assert_eq!(s.average_rating, 4.0);
    assert_eq!(s.recommended_percentage, 50);
}

#[test]
fn test_average_is_rounded_to_two_decimals() {
    let reviews = vec![
        review_for("b1", 5, ReviewStatus::Approved),
        review_for("b1", 5, ReviewStatus::Approved),
        review_for("b1", 4, ReviewStatus::Approved),
    ];
    let stats = compute_stats(&reviews, Some("b1"));

    // 14 / 3 = 4.666...
    assert_eq!(stats[0].average_rating, 4.67);
}

#[test]
fn test_distribution_sums_to_total() {
    let ratings = [1, 2, 2, 3, 4, 4, 4, 5, 5, 5];
    let reviews: Vec<Review> = ratings
        .iter()
        .map(|&r| review_for("b1", r, ReviewStatus::Approved))
        .collect();

    let stats = compute_stats(&reviews, Some("b1"));
    let s = &stats[0];

    assert_eq!(s.total_reviews, ratings.len());
    let sum: usize = s.rating_distribution.values().sum();
    assert_eq!(sum, s.total_reviews);
    assert_eq!(s.rating_distribution[&4], 3);
    // 6 of 10 reviews are 4 or 5 stars
    assert_eq!(s.recommended_percentage, 60);
}

#[test]
fn test_only_approved_reviews_are_counted() {
    let reviews = vec![
        review_for("b1", 5, ReviewStatus::Approved),
        review_for("b1", 1, ReviewStatus::Pending),
        review_for("b1", 1, ReviewStatus::Hidden),
        review_for("b1", 1, ReviewStatus::Rejected),
    ];
    let stats = compute_stats(&reviews, Some("b1"));

    assert_eq!(stats[0].total_reviews, 1);
    assert_eq!(stats[0].average_rating, 5.0);
}

#[test]
fn test_groups_by_business_when_no_id_is_given() {
    let reviews = vec![
        review_for("b2", 4, ReviewStatus::Approved),
        review_for("b1", 5, ReviewStatus::Approved),
        review_for("b1", 3, ReviewStatus::Approved),
        review_for("b3", 2, ReviewStatus::Pending),
    ];
    let stats = compute_stats(&reviews, None);

    // b3 has no approved reviews and gets no entry; output is ordered by id
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].business_id.as_deref(), Some("b1"));
    assert_eq!(stats[0].total_reviews, 2);
    assert_eq!(stats[1].business_id.as_deref(), Some("b2"));
    assert_eq!(stats[1].total_reviews, 1);
}

#[test]
fn test_unknown_business_yields_zeroed_stats() {
    let reviews = vec![review_for("b1", 5, ReviewStatus::Approved)];
    let stats = compute_stats(&reviews, Some("nowhere"));

    assert_eq!(stats.len(), 1);
    let s = &stats[0];
    assert_eq!(s.total_reviews, 0);
    assert_eq!(s.average_rating, 0.0);
    assert_eq!(s.recommended_percentage, 0);
    assert_eq!(s.response_rate, 0);
    let sum: usize = s.rating_distribution.values().sum();
    assert_eq!(sum, 0);
}

#[test]
fn test_response_rate_and_verified_count() {
    let mut verified_review = review_for("b1", 4, ReviewStatus::Approved);
    verified_review.verified = true;

    let reviews = vec![
        with_response(review_for("b1", 5, ReviewStatus::Approved)),
        verified_review,
        review_for("b1", 3, ReviewStatus::Approved),
    ];
    let stats = compute_stats(&reviews, Some("b1"));

    let s = &stats[0];
    assert_eq!(s.verified_reviews, 1);
    // 1 of 3 responded, rounded to the nearest integer
    assert_eq!(s.response_rate, 33);
}

#[test]
fn test_recomputation_is_idempotent_and_order_independent() {
    let reviews = vec![
        with_response(review_for("b1", 5, ReviewStatus::Approved)),
        review_for("b1", 2, ReviewStatus::Approved),
        review_for("b2", 4, ReviewStatus::Approved),
        review_for("b1", 1, ReviewStatus::Rejected),
    ];

    let mut reversed: Vec<Review> = reviews.clone();
    reversed.reverse();

    let first = compute_stats(&reviews, None);
    let second = compute_stats(&reviews, None);
    let shuffled = compute_stats(&reversed, None);

    for other in [&second, &shuffled] {
        assert_eq!(first.len(), other.len());
        for (a, b) in first.iter().zip(other.iter()) {
            assert_eq!(a.business_id, b.business_id);
            assert_eq!(a.total_reviews, b.total_reviews);
            assert_eq!(a.average_rating, b.average_rating);
            assert_eq!(a.rating_distribution, b.rating_distribution);
            assert_eq!(a.recommended_percentage, b.recommended_percentage);
            assert_eq!(a.verified_reviews, b.verified_reviews);
            assert_eq!(a.response_rate, b.response_rate);
        }
    }
}
