use super::common::*;
use crate::lqm::ListingData;

fn rated(reviews: u32, rating: f64, scale: u8) -> ListingData {
    ListingData {
        nr_reviews: Some(reviews),
        average_rating: Some(rating),
        rating_scale_max: Some(scale),
        ..ListingData::default()
    }
}

#[test]
fn review_recommendation_is_always_present() {
    let item = score_of(&ListingData::default(), "reviews_aanbeveling");

    assert!(!item.is_not_applicable());
    assert_eq!(item.passed(), Some(false));
    assert!(item.recommendation().is_some());
}

#[test]
fn rating_threshold_follows_the_scale() {
    assert_eq!(
        score_of(&rated(10, 8.0, 10), "beoordeling_boven_8").passed(),
        Some(true)
    );
    assert!(score_of(&rated(10, 7.9, 10), "beoordeling_boven_8").is_not_applicable());
    assert_eq!(
        score_of(&rated(10, 4.0, 5), "beoordeling_boven_8").passed(),
        Some(true)
    );
    assert!(score_of(&rated(10, 3.8, 5), "beoordeling_boven_8").is_not_applicable());
}

#[test]
fn rating_needs_more_than_three_reviews_and_a_known_scale() {
    assert!(score_of(&rated(3, 9.5, 10), "beoordeling_boven_8").is_not_applicable());
    assert!(score_of(&rated(10, 90.0, 100), "beoordeling_boven_8").is_not_applicable());
    assert_eq!(
        score_of(&rated(4, 9.5, 10), "beoordeling_boven_8").passed(),
        Some(true)
    );
}

#[test]
fn recent_reviews_verdict() {
    let none_recent = ListingData {
        nr_reviews_past6months: Some(0),
        ..ListingData::default()
    };
    assert_eq!(score_of(&none_recent, "recente_reviews").passed(), Some(false));
    assert!(score_of(&ListingData::default(), "recente_reviews").is_not_applicable());
}

#[test]
fn low_rating_never_fails_the_category() {
    let item = score_of(&rated(25, 6.2, 10), "beoordeling_boven_8");

    assert!(item.is_not_applicable());
    assert_eq!(item.passed(), None);
    assert!(item.recommendation().is_none());
}
