use listing_quality::lqm::{score_all, total_score, Category, ListingData, ScoreKind, CATALOG};
use proptest::option;
use proptest::prelude::*;

const GDS_GATED: [&str; 7] = [
    "bonus_short_stay",
    "malus_available_only_weeks",
    "malus_available_only_otherstays",
    "malus_fully_blocked",
    "malus_fully_nonbookable",
    "malus_fully_available",
    "malus_months_updated",
];

/// Rules whose input is the channel manager type itself.
const READS_CHANNEL_MANAGER: [&str; 3] = [
    "bonus_has_channel_manager",
    "bonus_has_opengds",
    "malus_icals_not_working",
];

fn short_text() -> impl Strategy<Value = Option<String>> {
    option::of("[A-Za-z ,.()*]{0,40}")
}

fn channel_manager() -> impl Strategy<Value = Option<String>> {
    option::of(prop_oneof![
        Just("OpenGDS".to_string()),
        Just("Smoobu".to_string()),
        Just("Lodgify".to_string()),
        Just(String::new()),
    ])
}

fn time() -> impl Strategy<Value = Option<String>> {
    option::of(prop_oneof![
        Just("00:00".to_string()),
        Just("07:00".to_string()),
        Just("22:00".to_string()),
        Just("25:00".to_string()),
        "[0-9:]{0,8}",
    ])
}

fn listing() -> impl Strategy<Value = ListingData> {
    let texts = (
        option::of("[A-Za-z ]{0,700}"),
        option::of("[A-Za-z ]{0,400}"),
        option::of(0u8..4),
        short_text(),
        short_text(),
        option::of(prop_oneof![Just("NL".to_string()), Just("BE".to_string())]),
    );
    let availability = (
        option::of(any::<bool>()),
        channel_manager(),
        option::of(0u32..6),
        option::of(0u32..6),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
        option::of(0u32..30),
        option::of(0u32..30),
        option::of(0u32..30),
    );
    let photos = (
        option::of(0u32..40),
        option::of(0.0f64..0.05),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
        option::of(0u32..3000),
        option::of(0u32..3000),
        option::of(0u32..50),
        option::of(0.0f64..10.0),
        option::of(prop_oneof![Just(5u8), Just(10u8)]),
    );
    let filters = (
        option::of(0u32..4),
        option::of(0u32..12),
        option::of(0u32..4),
        option::of(any::<bool>()),
        option::of(0u32..80),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
        option::of(0u32..12),
        option::of(0u32..12),
        option::of(0u32..12),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
    );
    let times = (
        option::of(prop::collection::vec(time().prop_map(Option::unwrap_or_default), 0..3)),
        time(),
        time(),
    );

    (texts, availability, photos, filters, times).prop_map(
        |(texts, availability, photos, filters, times)| ListingData {
            general_description: texts.0,
            nature_description: texts.1,
            sustainability_impact_level_leaves: texts.2,
            postcode: texts.3,
            place: texts.4,
            country: texts.5,
            allow_instant_booking: availability.0,
            channel_manager_type: availability.1,
            nr_icals_error: availability.2,
            nr_icals_total: availability.3,
            fully_blocked: availability.4,
            fully_nonbookable: availability.5,
            fully_available: availability.6,
            only_weeks_possible: availability.7,
            months_updated_priceplan: availability.8,
            months_last_update_blocks: availability.9,
            months_updated: availability.10,
            photo_count: photos.0,
            ctr: photos.1,
            cover_photo_suggests_nature: photos.2,
            first_photo_house_not_interior: photos.3,
            first_photo_width: photos.4,
            first_photo_height: photos.5,
            nr_reviews: photos.6,
            average_rating: photos.7,
            rating_scale_max: photos.8,
            max_babies: filters.0,
            baby_facilities_count: filters.1,
            max_animals: filters.2,
            has_pet_related_features: filters.3,
            total_house_attributes: filters.4,
            allow_fireworks: filters.5,
            allow_groups: filters.6,
            number_of_bedrooms: filters.7,
            max_persons: filters.8,
            nr_house_themes: filters.9,
            theme_coastal: filters.10,
            region_inland: filters.11,
            arrival_departure_times: times.0,
            silence_start: times.1,
            silence_end: times.2,
            ..ListingData::default()
        },
    )
}

/// Random records, with the empty record drawn often enough to matter.
fn listing_or_empty() -> impl Strategy<Value = ListingData> {
    prop_oneof![1 => Just(ListingData::default()), 3 => listing()]
}

proptest! {
    #[test]
    fn every_rule_yields_exactly_one_item_in_catalog_order(data in listing()) {
        let items = score_all(&data);
        prop_assert_eq!(items.len(), CATALOG.len());
        for (item, rule) in items.iter().zip(CATALOG.iter()) {
            prop_assert_eq!(item.attribute(), rule.attribute);
            prop_assert_eq!(item.category(), rule.category);
            prop_assert_eq!(item.kind(), rule.kind);
        }
    }

    #[test]
    fn not_applicable_and_advisory_items_carry_no_points(data in listing()) {
        for item in score_all(&data) {
            if item.is_not_applicable() || item.kind() == ScoreKind::Advisory {
                prop_assert_eq!(item.score(), 0, "{} scored", item.attribute());
            }
            match item.kind() {
                ScoreKind::Bonus => prop_assert!(item.score() >= 0),
                ScoreKind::Malus => prop_assert!(item.score() <= 0),
                ScoreKind::Advisory => {}
            }
        }
    }

    #[test]
    fn advisory_inputs_do_not_move_the_total(
        data in listing_or_empty(),
        general in option::of("[A-Z a-z]{0,400}"),
        nature in option::of("[A-Z a-z]{0,300}"),
        photos in option::of(0u32..60),
        ctr in option::of(0.0f64..1.0),
        reviews in option::of(0u32..40),
        recent in option::of(0u32..10),
        rating in option::of(0.0f64..10.0),
        scale in option::of(prop_oneof![Just(5u8), Just(10u8), Just(100u8)]),
        watermark in option::of(any::<bool>()),
    ) {
        let baseline = total_score(&score_all(&data));
        let tweaked = ListingData {
            general_description: general,
            nature_description: nature,
            photo_count: photos,
            ctr,
            vision_has_watermark: watermark,
            nr_reviews: reviews,
            nr_reviews_past6months: recent,
            average_rating: rating,
            rating_scale_max: scale,
            ..data
        };
        prop_assert_eq!(total_score(&score_all(&tweaked)), baseline);
    }

    #[test]
    fn total_is_the_sum_of_scored_categories(data in listing()) {
        let items = score_all(&data);
        let scored: i32 = items
            .iter()
            .filter(|item| !item.category().is_advisory())
            .map(|item| item.score())
            .sum();
        prop_assert_eq!(total_score(&items), scored);
        prop_assert!(items
            .iter()
            .filter(|item| matches!(item.category(), Category::Description | Category::Photos | Category::GuestOpinion))
            .all(|item| item.kind() == ScoreKind::Advisory));
    }

    #[test]
    fn gds_managed_listings_skip_availability_checks(data in listing_or_empty()) {
        let managed = ListingData {
            channel_manager_type: Some("OpenGDS".to_string()),
            ..data.clone()
        };
        let before = score_all(&data);
        let items = score_all(&managed);
        for (plain, gated) in before.iter().zip(&items) {
            if GDS_GATED.contains(&plain.attribute()) || READS_CHANNEL_MANAGER.contains(&plain.attribute()) {
                continue;
            }
            prop_assert_eq!(plain, gated, "{} changed under GDS", plain.attribute());
        }
        for attribute in GDS_GATED {
            let item = items
                .iter()
                .find(|item| item.attribute() == attribute)
                .expect("gated rule present");
            prop_assert!(item.is_not_applicable(), "{} applied under GDS", attribute);
        }
        let icals = items
            .iter()
            .find(|item| item.attribute() == "malus_icals_not_working")
            .expect("ical rule present");
        prop_assert_eq!(icals.score(), 0);
    }

    #[test]
    fn scoring_is_deterministic(data in listing()) {
        prop_assert_eq!(score_all(&data), score_all(&data.clone()));
    }
}
