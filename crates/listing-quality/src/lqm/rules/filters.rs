use super::{NO_SCORED_INPUTS, NOT_VISIBLE};
use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;
use crate::lqm::validation::{accommodation_types, has_text};

const BABIES_MISMATCH_MALUS: i32 = -3;
const PETS_MISMATCH_MALUS: i32 = -5;
const ZERO_ATTRIBUTES_MALUS: i32 = -5;
const ACCOMMODATION_TYPES_MALUS: i32 = -3;
const POLICY_MISSING_MALUS: i32 = -3;
const ROOMS_MALUS: i32 = -7;
const THEMES_MALUS: i32 = -5;
const COASTAL_INLAND_MALUS: i32 = -7;

fn consistent(bad: bool, score: i32, problem: &str) -> Outcome {
    if bad {
        Outcome::points(score, problem)
    } else {
        Outcome::points(0, "Consistent ingevuld.")
    }
}

fn policy(data: &ListingData, known: bool, label: &str) -> Outcome {
    if !data.has_scored_inputs() {
        Outcome::not_applicable(NO_SCORED_INPUTS)
    } else if known {
        Outcome::points(0, format!("{label} ingevuld."))
    } else {
        Outcome::points(POLICY_MISSING_MALUS, format!("{label} ontbreekt."))
    }
}

pub(crate) fn babies_mismatch(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let (Some(babies), Some(facilities)) = (data.max_babies, data.baby_facilities_count) else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    consistent(
        babies == 0 && facilities >= thresholds.baby_facilities_mismatch,
        BABIES_MISMATCH_MALUS,
        "Geen baby's toegestaan maar wel babyvoorzieningen.",
    )
}

pub(crate) fn pets_mismatch(data: &ListingData, _: &Thresholds) -> Outcome {
    let (Some(animals), Some(features)) = (data.max_animals, data.has_pet_related_features) else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    consistent(
        animals == 0 && features,
        PETS_MISMATCH_MALUS,
        "Geen huisdieren toegestaan maar wel huisdiervoorzieningen.",
    )
}

pub(crate) fn zero_house_attributes(data: &ListingData, _: &Thresholds) -> Outcome {
    match data.total_house_attributes {
        Some(0) => Outcome::points(ZERO_ATTRIBUTES_MALUS, "Geen huisattributen ingevuld."),
        Some(count) => Outcome::points(0, format!("{count} huisattributen ingevuld.")),
        None => Outcome::not_applicable(NOT_VISIBLE),
    }
}

pub(crate) fn accommodation_type_count(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let Some(raw) = data
        .accommodation_type_string
        .as_deref()
        .filter(|raw| has_text(Some(raw)))
    else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    let count = accommodation_types(raw).len();
    if count > thresholds.max_accommodation_types {
        Outcome::points(
            ACCOMMODATION_TYPES_MALUS,
            format!("Te veel accommodatietypes: {count}."),
        )
    } else {
        Outcome::points(0, format!("Accommodatietypes: {count}."))
    }
}

pub(crate) fn fireworks_missing(data: &ListingData, _: &Thresholds) -> Outcome {
    policy(data, data.allow_fireworks.is_some(), "Vuurwerkbeleid")
}

pub(crate) fn groups_missing(data: &ListingData, _: &Thresholds) -> Outcome {
    policy(data, data.allow_groups.is_some(), "Groepenbeleid")
}

pub(crate) fn smoking_parties_missing(data: &ListingData, _: &Thresholds) -> Outcome {
    policy(
        data,
        data.allow_smoking.is_some() && data.allow_parties.is_some(),
        "Beleid voor roken en feesten",
    )
}

pub(crate) fn more_rooms_than_persons(data: &ListingData, _: &Thresholds) -> Outcome {
    let (Some(bedrooms), Some(persons), Some(babies)) =
        (data.number_of_bedrooms, data.max_persons, data.max_babies)
    else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    consistent(
        bedrooms > persons.saturating_add(babies),
        ROOMS_MALUS,
        "Meer slaapkamers dan personen en baby's samen.",
    )
}

pub(crate) fn house_themes_overwhelming(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    match data.nr_house_themes {
        Some(themes) if themes >= thresholds.overwhelming_house_themes => {
            Outcome::points(THEMES_MALUS, format!("Te veel thema's: {themes}."))
        }
        Some(themes) => Outcome::points(0, format!("Aantal thema's: {themes}.")),
        None => Outcome::not_applicable(NOT_VISIBLE),
    }
}

pub(crate) fn coastal_but_inland(data: &ListingData, _: &Thresholds) -> Outcome {
    let (Some(coastal), Some(inland)) = (data.theme_coastal, data.region_inland) else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    consistent(
        coastal && inland,
        COASTAL_INLAND_MALUS,
        "Kustthema terwijl de regio in het binnenland ligt.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_rules_penalise_missing_values_once_the_page_was_read() {
        let t = Thresholds::standard();
        let data = ListingData {
            allow_smoking: Some(false),
            ..ListingData::default()
        };
        assert!(matches!(
            fireworks_missing(&data, &t),
            Outcome::Points { score: -3, .. }
        ));
        assert!(matches!(
            smoking_parties_missing(&data, &t),
            Outcome::Points { score: -3, .. }
        ));
        assert!(matches!(
            groups_missing(&ListingData::default(), &t),
            Outcome::NotApplicable(_)
        ));
    }

    #[test]
    fn rooms_count_babies_as_guests() {
        let t = Thresholds::standard();
        let data = ListingData {
            number_of_bedrooms: Some(3),
            max_persons: Some(2),
            max_babies: Some(1),
            ..ListingData::default()
        };
        assert!(matches!(
            more_rooms_than_persons(&data, &t),
            Outcome::Points { score: 0, .. }
        ));
    }

    #[test]
    fn three_accommodation_types_is_too_many() {
        let t = Thresholds::standard();
        let data = ListingData {
            accommodation_type_string: Some("villa, bungalow, chalet".to_string()),
            ..ListingData::default()
        };
        assert!(matches!(
            accommodation_type_count(&data, &t),
            Outcome::Points { score: -3, .. }
        ));
    }
}
