use super::domain::{Category, ListingData, ScoreItem, ScoreKind};
use super::rules::{
    availability, description, filters, guest_opinion, impact, location, photos, time_settings,
};
use super::thresholds::Thresholds;

/// Result of evaluating a single rule before it is stamped into a [`ScoreItem`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    NotApplicable(String),
    Points {
        score: i32,
        reason: String,
    },
    Verdict {
        passed: bool,
        reason: String,
        recommendation: Option<String>,
    },
}

impl Outcome {
    pub(crate) fn not_applicable(reason: impl Into<String>) -> Self {
        Self::NotApplicable(reason.into())
    }

    pub(crate) fn points(score: i32, reason: impl Into<String>) -> Self {
        Self::Points {
            score,
            reason: reason.into(),
        }
    }

    pub(crate) fn pass(reason: impl Into<String>) -> Self {
        Self::Verdict {
            passed: true,
            reason: reason.into(),
            recommendation: None,
        }
    }

    pub(crate) fn fail(reason: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self::Verdict {
            passed: false,
            reason: reason.into(),
            recommendation: Some(recommendation.into()),
        }
    }
}

type Evaluator = fn(&ListingData, &Thresholds) -> Outcome;

/// One row of the LQM catalog.
pub struct RuleSpec {
    pub attribute: &'static str,
    pub category: Category,
    pub kind: ScoreKind,
    evaluate: Evaluator,
}

impl RuleSpec {
    const fn new(
        attribute: &'static str,
        category: Category,
        kind: ScoreKind,
        evaluate: Evaluator,
    ) -> Self {
        Self {
            attribute,
            category,
            kind,
            evaluate,
        }
    }

    /// Evaluate the rule against a record. Always yields exactly one item.
    pub fn evaluate(&self, data: &ListingData, thresholds: &Thresholds) -> ScoreItem {
        match (self.evaluate)(data, thresholds) {
            Outcome::NotApplicable(reason) => {
                ScoreItem::not_applicable(self.attribute, self.category, self.kind, reason)
            }
            Outcome::Verdict {
                passed,
                reason,
                recommendation,
            } => {
                debug_assert_eq!(
                    self.kind,
                    ScoreKind::Advisory,
                    "{} returned a verdict",
                    self.attribute
                );
                ScoreItem::verdict(self.attribute, self.category, passed, reason, recommendation)
            }
            Outcome::Points { score, reason } => {
                ScoreItem::points(self.attribute, self.category, self.kind, score, reason)
            }
        }
    }
}

use Category::{
    Availability, Description, Filters, GuestOpinion, Impact, Location, Photos, TimeSettings,
};
use ScoreKind::{Advisory, Bonus, Malus};

/// The LQM rule catalog in report order. Adding a rule means adding a row here.
pub static CATALOG: &[RuleSpec] = &[
    // Description
    RuleSpec::new("algemene_beschrijving", Description, Advisory, description::general_length),
    RuleSpec::new("natuur_beschrijving", Description, Advisory, description::nature_length),
    RuleSpec::new("beschrijvingen_verschillend", Description, Advisory, description::texts_differ),
    RuleSpec::new("geen_capslock", Description, Advisory, description::no_capslock),
    // Impact
    RuleSpec::new("bonus_impact_score_leaves", Impact, Bonus, impact::leaves_bonus),
    RuleSpec::new("malus_impact_score_leaves", Impact, Malus, impact::leaves_missing),
    // Location
    RuleSpec::new("malus_not_a_valid_postcode", Location, Malus, location::invalid_postcode),
    RuleSpec::new("malus_place_chars", Location, Malus, location::place_chars),
    // Availability
    RuleSpec::new("bonus_allow_instant_booking", Availability, Bonus, availability::instant_booking),
    RuleSpec::new("bonus_has_channel_manager", Availability, Bonus, availability::has_channel_manager),
    RuleSpec::new("bonus_has_opengds", Availability, Bonus, availability::has_opengds),
    RuleSpec::new("bonus_icals_working", Availability, Bonus, availability::icals_working),
    RuleSpec::new("bonus_short_stay", Availability, Bonus, availability::short_stay),
    RuleSpec::new(
        "bonus_priceplan_updated6months_or_recent",
        Availability,
        Bonus,
        availability::priceplan_recent,
    ),
    RuleSpec::new(
        "bonus_recent_agenda_block_updated",
        Availability,
        Bonus,
        availability::agenda_blocks_recent,
    ),
    RuleSpec::new("malus_available_only_weeks", Availability, Malus, availability::only_weeks),
    RuleSpec::new(
        "malus_available_only_otherstays",
        Availability,
        Malus,
        availability::only_other_stays,
    ),
    RuleSpec::new("malus_icals_not_working", Availability, Malus, availability::icals_not_working),
    RuleSpec::new("malus_fully_blocked", Availability, Malus, availability::fully_blocked),
    RuleSpec::new("malus_fully_nonbookable", Availability, Malus, availability::fully_nonbookable),
    RuleSpec::new("malus_fully_available", Availability, Malus, availability::fully_available),
    RuleSpec::new("malus_months_updated", Availability, Malus, availability::months_updated),
    // Photos
    RuleSpec::new("aantal_fotos", Photos, Advisory, photos::photo_count),
    RuleSpec::new("klikratio", Photos, Advisory, photos::click_through_rate),
    RuleSpec::new("coverfoto_natuur", Photos, Advisory, photos::cover_photo_nature),
    RuleSpec::new("eerste_foto_exterieur", Photos, Advisory, photos::first_photo_exterior),
    RuleSpec::new("eerste_foto_geen_watermerk", Photos, Advisory, photos::no_watermark),
    RuleSpec::new("eerste_foto_geen_collage", Photos, Advisory, photos::no_collage),
    RuleSpec::new("eerste_foto_resolutie", Photos, Advisory, photos::resolution),
    // Guest opinion
    RuleSpec::new("reviews_aanbeveling", GuestOpinion, Advisory, guest_opinion::review_recommendation),
    RuleSpec::new("beoordeling_boven_8", GuestOpinion, Advisory, guest_opinion::rating_above_eight),
    RuleSpec::new("recente_reviews", GuestOpinion, Advisory, guest_opinion::recent_reviews),
    // Filters
    RuleSpec::new(
        "malus_dont_allow_babies_but_many_attributes",
        Filters,
        Malus,
        filters::babies_mismatch,
    ),
    RuleSpec::new(
        "malus_mismatch_allow_pets_and_pets_attributes",
        Filters,
        Malus,
        filters::pets_mismatch,
    ),
    RuleSpec::new("malus_zero_houseattributes", Filters, Malus, filters::zero_house_attributes),
    RuleSpec::new("malus_accomodation_type_count", Filters, Malus, filters::accommodation_type_count),
    RuleSpec::new("malus_allow_fireworks_missing", Filters, Malus, filters::fireworks_missing),
    RuleSpec::new("malus_allow_groups_missing", Filters, Malus, filters::groups_missing),
    RuleSpec::new(
        "malus_allow_smoking_parties_missing",
        Filters,
        Malus,
        filters::smoking_parties_missing,
    ),
    RuleSpec::new("malus_more_rooms_than_persons", Filters, Malus, filters::more_rooms_than_persons),
    RuleSpec::new(
        "malus_nr_house_themes_overwhelming",
        Filters,
        Malus,
        filters::house_themes_overwhelming,
    ),
    RuleSpec::new("malus_province_not_at_sea_coast", Filters, Malus, filters::coastal_but_inland),
    // Time settings
    RuleSpec::new(
        "malus_arrival_departure_00h00",
        TimeSettings,
        Malus,
        time_settings::midnight_moments,
    ),
    RuleSpec::new(
        "malus_silence_start_end_time_missing",
        TimeSettings,
        Malus,
        time_settings::silence_missing,
    ),
    RuleSpec::new(
        "malus_silence_start_stop_swapped",
        TimeSettings,
        Malus,
        time_settings::silence_swapped,
    ),
];

/// Rows of the catalog belonging to one category, in catalog order.
pub fn rules_for(category: Category) -> impl Iterator<Item = &'static RuleSpec> {
    CATALOG.iter().filter(move |rule| rule.category == category)
}
