use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;
use crate::lqm::validation::{has_text, is_valid_postcode};

const INVALID_POSTCODE_MALUS: i32 = -2;
const PLACE_CHARS_MALUS: i32 = -2;
const MARKETING_CHARS: [char; 3] = ['(', '*', ','];

pub(crate) fn invalid_postcode(data: &ListingData, _: &Thresholds) -> Outcome {
    let Some(postcode) = data.postcode.as_deref().filter(|pc| has_text(Some(pc))) else {
        return Outcome::not_applicable("Postcode niet beschikbaar.");
    };
    if is_valid_postcode(postcode, data.country.as_deref()) {
        Outcome::points(0, format!("Postcode {} is geldig.", postcode.trim()))
    } else {
        Outcome::points(
            INVALID_POSTCODE_MALUS,
            format!("Ongeldige postcode: {}.", postcode.trim()),
        )
    }
}

pub(crate) fn place_chars(data: &ListingData, _: &Thresholds) -> Outcome {
    let Some(place) = data.place.as_deref() else {
        return Outcome::not_applicable("Plaatsnaam niet beschikbaar.");
    };
    if place.contains(MARKETING_CHARS) {
        Outcome::points(
            PLACE_CHARS_MALUS,
            "Plaatsnaam bevat marketing- of onduidelijke tekens.",
        )
    } else {
        Outcome::points(0, "Plaatsnaam OK.")
    }
}
