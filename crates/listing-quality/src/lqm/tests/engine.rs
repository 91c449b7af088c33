use super::common::*;
use crate::lqm::{rules_for, Category, ListingData, Thresholds, CATALOG};

#[test]
fn items_follow_catalog_order() {
    let items = engine().score_all(&ideal_listing());
    let attributes: Vec<_> = items.iter().map(|item| item.attribute()).collect();
    let catalog: Vec<_> = CATALOG.iter().map(|rule| rule.attribute).collect();

    assert_eq!(attributes, catalog);
}

#[test]
fn categories_are_emitted_in_report_order() {
    let items = engine().score_all(&ListingData::default());
    let mut seen = Vec::new();
    for item in &items {
        if seen.last() != Some(&item.category()) {
            seen.push(item.category());
        }
    }

    assert_eq!(seen, Category::ordered().to_vec());
}

#[test]
fn score_category_matches_the_full_run() {
    let data = ideal_listing();
    let engine = engine();
    let all = engine.score_all(&data);

    for category in Category::ordered() {
        let scoped = engine.score_category(category, &data);
        assert_eq!(scoped.len(), rules_for(category).count());
        let from_all: Vec<_> = all
            .iter()
            .filter(|item| item.category() == category)
            .cloned()
            .collect();
        assert_eq!(scoped, from_all, "{category:?}");
    }
}

#[test]
fn custom_thresholds_change_the_outcome() {
    let strict = crate::lqm::LqmEngine::new(Thresholds {
        photo_count_min: 25,
        ..Thresholds::standard()
    });
    let items = strict.score_all(&ideal_listing());

    assert_eq!(find(&items, "aantal_fotos").passed(), Some(false));
    assert_eq!(strict.thresholds().photo_count_min, 25);
}

#[test]
fn opengds_gates_managed_availability_rules() {
    let mut data = ideal_listing();
    data.fully_blocked = Some(true);
    data.months_updated = Some(20);
    let before = engine().score_all(&data);
    assert_eq!(find(&before, "malus_fully_blocked").score(), -30);
    assert_eq!(find(&before, "malus_months_updated").score(), -3);

    data.channel_manager_type = Some("OpenGDS".to_string());
    let after = engine().score_all(&data);

    for attribute in [
        "malus_fully_blocked",
        "malus_months_updated",
        "malus_icals_not_working",
        "bonus_short_stay",
    ] {
        assert!(find(&after, attribute).is_not_applicable(), "{attribute}");
    }
    assert_eq!(find(&after, "bonus_has_opengds").score(), 10);
    assert_eq!(find(&after, "bonus_has_channel_manager").score(), 10);
}
