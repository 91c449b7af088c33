use crate::lqm::{LqmEngine, ListingData, ScoreItem};

pub(super) fn engine() -> LqmEngine {
    LqmEngine::standard()
}

pub(super) fn text(len: usize) -> String {
    "a".repeat(len)
}

/// A well maintained listing on a non-GDS channel manager.
pub(super) fn ideal_listing() -> ListingData {
    ListingData {
        general_description: Some(text(600)),
        nature_description: Some("b".repeat(320)),
        sustainability_impact_level_leaves: Some(2),
        postcode: Some("1234 AB".to_string()),
        place: Some("Ellecom".to_string()),
        country: Some("NL".to_string()),
        allow_instant_booking: Some(true),
        channel_manager_type: Some("Lodgify".to_string()),
        nr_icals_error: Some(0),
        nr_icals_total: Some(2),
        photo_count: Some(20),
        vision_is_exterior: Some(true),
        vision_has_watermark: Some(false),
        vision_is_collage: Some(false),
        first_photo_width: Some(1200),
        first_photo_height: Some(800),
        nr_reviews: Some(10),
        nr_reviews_past6months: Some(4),
        average_rating: Some(9.0),
        rating_scale_max: Some(10),
        max_babies: Some(1),
        baby_facilities_count: Some(2),
        max_animals: Some(1),
        has_pet_related_features: Some(true),
        total_house_attributes: Some(24),
        accommodation_type_string: Some("vakantiehuis".to_string()),
        allow_fireworks: Some(false),
        allow_groups: Some(false),
        allow_smoking: Some(false),
        allow_parties: Some(false),
        number_of_bedrooms: Some(2),
        max_persons: Some(4),
        nr_house_themes: Some(3),
        theme_coastal: Some(false),
        region_inland: Some(true),
        arrival_departure_times: Some(vec!["15:00:00".to_string(), "10:00:00".to_string()]),
        silence_start: Some("22:00".to_string()),
        silence_end: Some("07:00".to_string()),
        ..ListingData::default()
    }
}

pub(super) fn find<'a>(items: &'a [ScoreItem], attribute: &str) -> &'a ScoreItem {
    items
        .iter()
        .find(|item| item.attribute() == attribute)
        .unwrap_or_else(|| panic!("missing item {attribute}"))
}

pub(super) fn score_of(data: &ListingData, attribute: &str) -> ScoreItem {
    find(&engine().score_all(data), attribute).clone()
}
