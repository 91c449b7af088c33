use super::NO_SCORED_INPUTS;
use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;
use crate::lqm::validation::{has_text, is_midnight_placeholder, parse_hour};

const MIDNIGHT_MALUS: i32 = -2;
const SILENCE_MISSING_MALUS: i32 = -3;
const SILENCE_SWAPPED_MALUS: i32 = -5;

pub(crate) fn midnight_moments(data: &ListingData, _: &Thresholds) -> Outcome {
    let Some(times) = data
        .arrival_departure_times
        .as_deref()
        .filter(|times| !times.is_empty())
    else {
        return Outcome::not_applicable("Aankomst- en vertrektijden niet zichtbaar.");
    };
    if times.iter().any(|time| is_midnight_placeholder(time)) {
        Outcome::points(
            MIDNIGHT_MALUS,
            "Aankomst of vertrek om 00:00, waarschijnlijk niet ingesteld.",
        )
    } else {
        Outcome::points(0, "Geen aankomst of vertrek om 00:00.")
    }
}

pub(crate) fn silence_missing(data: &ListingData, _: &Thresholds) -> Outcome {
    if !data.has_scored_inputs() {
        return Outcome::not_applicable(NO_SCORED_INPUTS);
    }
    if has_text(data.silence_start.as_deref()) && has_text(data.silence_end.as_deref()) {
        Outcome::points(0, "Stilte-uren ingevuld.")
    } else {
        Outcome::points(SILENCE_MISSING_MALUS, "Stilte-uren ontbreken.")
    }
}

pub(crate) fn silence_swapped(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let Some(end) = data.silence_end.as_deref().filter(|end| has_text(Some(end))) else {
        return Outcome::not_applicable("Geen einde van de stilte-uren.");
    };
    let Some(hour) = parse_hour(end) else {
        return Outcome::not_applicable(format!("Tijd niet te lezen: {}.", end.trim()));
    };
    let (from, to) = thresholds.swapped_silence_end_hours;
    if (from..=to).contains(&hour) {
        Outcome::points(
            SILENCE_SWAPPED_MALUS,
            "Stilte-uren eindigen 's middags of 's avonds; begin en einde lijken omgewisseld.",
        )
    } else {
        Outcome::points(0, "Einde van de stilte-uren OK.")
    }
}
