use super::NO_SCORED_INPUTS;
use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;

const ZERO_LEAVES_BONUS: i32 = 1;
const LEAVES_BONUS: i32 = 3;
const MISSING_LEAVES_MALUS: i32 = -5;

pub(crate) fn leaves_bonus(data: &ListingData, _: &Thresholds) -> Outcome {
    match data.sustainability_impact_level_leaves {
        Some(0) => Outcome::points(
            ZERO_LEAVES_BONUS,
            "Duurzaamheidslabel aanwezig zonder blaadjes.",
        ),
        Some(leaves) => Outcome::points(
            LEAVES_BONUS,
            format!("Duurzaamheidslabel met {leaves} blaadje(s)."),
        ),
        None => Outcome::not_applicable("Impactscore niet beschikbaar."),
    }
}

pub(crate) fn leaves_missing(data: &ListingData, _: &Thresholds) -> Outcome {
    if !data.has_scored_inputs() {
        return Outcome::not_applicable(NO_SCORED_INPUTS);
    }
    match data.sustainability_impact_level_leaves {
        Some(_) => Outcome::points(0, "Impactscore aanwezig."),
        None => Outcome::points(MISSING_LEAVES_MALUS, "Impact/duurzaamheidsscore ontbreekt."),
    }
}
