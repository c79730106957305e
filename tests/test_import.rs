use chrono::{Duration, TimeZone, Utc};
use localspot_be::models::business::BusinessSummary;
use localspot_be::models::imported::{ImportedReview, ReviewSource};
use localspot_be::models::review::{Review, ReviewStatus};
use localspot_be::reviews::import::{dedup_key, import_batch, map_imported};

fn business() -> BusinessSummary {
    BusinessSummary {
        id: "b1".to_string(),
        name: "Blue Door Cafe".to_string(),
        category: "cafe".to_string(),
        neighborhood: "Riverside".to_string(),
    }
}

fn imported_item(external_id: &str) -> ImportedReview {
    ImportedReview {
        external_id: Some(external_id.to_string()),
        rating: 4,
        title: Some("Solid espresso".to_string()),
        content: "Quick service and a good pour".to_string(),
        author_name: "Miguel".to_string(),
        date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        response: None,
        verified: true,
    }
}

#[test]
fn test_import_maps_fields() {
    let mut reviews: Vec<Review> = Vec::new();
    let report = import_batch(
        &mut reviews,
        &business(),
        ReviewSource::Google,
        &[imported_item("g-1")],
    );

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 0);
    assert!(report.errors.is_empty());
    assert_eq!(reviews.len(), 1);

    let review = &reviews[0];
    assert_eq!(review.status, ReviewStatus::Approved);
    assert_eq!(review.business_id, "b1");
    assert_eq!(review.business_name, "Blue Door Cafe");
    assert_eq!(review.business_neighborhood, "Riverside");
    assert_eq!(review.user_name, "Miguel");
    assert_eq!(review.rating, 4);
    assert!(review.verified);
    assert_eq!(review.source, Some(ReviewSource::Google));
    assert_eq!(review.external_id.as_deref(), Some("g-1"));
    assert_eq!(review.created_at, imported_item("g-1").date);
}

#[test]
fn test_reimport_is_skipped() {
    let mut reviews: Vec<Review> = Vec::new();
    let items = [imported_item("g-1")];

    let first = import_batch(&mut reviews, &business(), ReviewSource::Google, &items);
    assert_eq!(first.imported, 1);

    let second = import_batch(&mut reviews, &business(), ReviewSource::Google, &items);
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped, 1);
    assert!(second.errors.is_empty());
    assert_eq!(reviews.len(), 1);
}

#[test]
fn test_duplicates_within_one_batch_are_skipped() {
    let mut reviews: Vec<Review> = Vec::new();
    let items = [imported_item("g-1"), imported_item("g-1")];

    let report = import_batch(&mut reviews, &business(), ReviewSource::Google, &items);
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(reviews.len(), 1);
}

#[test]
fn test_same_external_id_from_another_source_is_distinct() {
    let mut reviews: Vec<Review> = Vec::new();
    import_batch(
        &mut reviews,
        &business(),
        ReviewSource::Google,
        &[imported_item("42")],
    );
    let report = import_batch(
        &mut reviews,
        &business(),
        ReviewSource::Yelp,
        &[imported_item("42")],
    );

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(reviews.len(), 2);
    assert_ne!(
        dedup_key(ReviewSource::Google, "42"),
        dedup_key(ReviewSource::Yelp, "42")
    );
}

#[test]
fn test_missing_external_id_is_an_error_not_a_fallback() {
    let mut reviews: Vec<Review> = Vec::new();
    let mut item = imported_item("ignored");
    item.external_id = None;
    let mut blank = imported_item("ignored");
    blank.external_id = Some("   ".to_string());

    let report = import_batch(
        &mut reviews,
        &business(),
        ReviewSource::Facebook,
        &[item, blank],
    );

    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.errors.len(), 2);
    assert!(reviews.is_empty());
}

#[test]
fn test_item_failure_does_not_abort_the_batch() {
    let mut reviews: Vec<Review> = Vec::new();
    let mut bad = imported_item("g-bad");
    bad.rating = 9;

    let report = import_batch(
        &mut reviews,
        &business(),
        ReviewSource::Google,
        &[bad, imported_item("g-ok")],
    );

    assert_eq!(report.imported, 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("item 0"));
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].external_id.as_deref(), Some("g-ok"));
}

#[test]
fn test_imported_response_is_synthesized_a_day_later() {
    let mut item = imported_item("g-1");
    item.response = Some("Glad you enjoyed the espresso".to_string());

    let review = map_imported(&item, ReviewSource::Google, &business()).unwrap();
    let response = review.response.as_ref().unwrap();

    assert_eq!(response.review_id, review.id);
    assert_eq!(response.business_id, "b1");
    assert_eq!(response.created_at, review.created_at + Duration::days(1));
    assert_eq!(response.content, "Glad you enjoyed the espresso");
}

#[test]
fn test_missing_title_gets_a_source_placeholder() {
    let mut item = imported_item("g-1");
    item.title = None;

    let review = map_imported(&item, ReviewSource::Yelp, &business()).unwrap();
    assert_eq!(review.title, "Review from yelp");
}

#[test]
fn test_user_submitted_reviews_never_collide_with_imports() {
    // A stored review without a source has no dedup identity
    let mut item = imported_item("g-1");
    item.external_id = Some("g-1".to_string());
    let mut reviews: Vec<Review> = Vec::new();
    import_batch(
        &mut reviews,
        &business(),
        ReviewSource::Google,
        &[item.clone()],
    );
    reviews[0].source = None;
    reviews[0].external_id = None;

    let report = import_batch(&mut reviews, &business(), ReviewSource::Google, &[item]);
    assert_eq!(report.imported, 1);
    assert_eq!(reviews.len(), 2);
}
