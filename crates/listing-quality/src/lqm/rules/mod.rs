//! Category evaluators. Every function takes the listing and the thresholds and returns a
//! single outcome; the catalog decides which attribute and category it belongs to.

pub(crate) mod availability;
pub(crate) mod description;
pub(crate) mod filters;
pub(crate) mod guest_opinion;
pub(crate) mod impact;
pub(crate) mod location;
pub(crate) mod photos;
pub(crate) mod time_settings;

use super::catalog::Outcome;

pub(crate) const NOT_VISIBLE: &str = "Niet zichtbaar op pagina.";
pub(crate) const NO_SCORED_INPUTS: &str = "Geen gegevens van de pagina om te beoordelen.";

/// Points for a known flag: `score` when set, zero when known to be unset.
pub(crate) fn flag_points(value: Option<bool>, score: i32, set: &str, unset: &str) -> Outcome {
    match value {
        Some(true) => Outcome::points(score, set),
        Some(false) => Outcome::points(0, unset),
        None => Outcome::not_applicable(NOT_VISIBLE),
    }
}

/// Pass/fail for a known flag where `true` is the desired value.
pub(crate) fn flag_verdict(
    value: Option<bool>,
    na_reason: &str,
    pass: &str,
    fail: &str,
    recommendation: &str,
) -> Outcome {
    match value {
        Some(true) => Outcome::pass(pass),
        Some(false) => Outcome::fail(fail, recommendation),
        None => Outcome::not_applicable(na_reason),
    }
}
