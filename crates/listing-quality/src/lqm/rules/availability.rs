//! Availability rules. Most of them judge calendar state that the OpenGDS integration
//! manages on the owner's behalf, so they step aside for those listings.

use super::{flag_points, NOT_VISIBLE};
use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;

const INSTANT_BOOKING_BONUS: i32 = 15;
const CHANNEL_MANAGER_BONUS: i32 = 10;
const OPENGDS_BONUS: i32 = 10;
const SHORT_STAY_BONUS: i32 = 12;
const RECENT_UPDATE_BONUS: i32 = 3;
const ONLY_WEEKS_MALUS: i32 = -5;
const ONLY_OTHER_STAYS_MALUS: i32 = -10;
const ICAL_ERROR_MALUS: i32 = -10;
const FULLY_BLOCKED_MALUS: i32 = -30;
const FULLY_NONBOOKABLE_MALUS: i32 = -30;
const FULLY_AVAILABLE_MALUS: i32 = -5;
const STALE_UPDATE_MALUS: i32 = -3;

const MANAGED_BY_GDS: &str = "Beschikbaarheid wordt beheerd via OpenGDS.";

/// Runs `rule` unless the channel manager owns the availability calendar.
fn unless_gds_managed(data: &ListingData, rule: impl FnOnce() -> Outcome) -> Outcome {
    if data.channel_manager().manages_availability() {
        Outcome::not_applicable(MANAGED_BY_GDS)
    } else {
        rule()
    }
}

fn ical_weight(total: u32) -> i32 {
    match total {
        1 => 4,
        2 => 3,
        _ => 2,
    }
}

pub(crate) fn instant_booking(data: &ListingData, _: &Thresholds) -> Outcome {
    flag_points(
        data.allow_instant_booking,
        INSTANT_BOOKING_BONUS,
        "Direct boeken mogelijk.",
        "Geen direct boeken.",
    )
}

pub(crate) fn has_channel_manager(data: &ListingData, _: &Thresholds) -> Outcome {
    match data.channel_manager_type.as_deref().map(str::trim) {
        None => Outcome::not_applicable(NOT_VISIBLE),
        Some("") => Outcome::points(0, "Geen channel manager."),
        Some(kind) => Outcome::points(
            CHANNEL_MANAGER_BONUS,
            format!("Channel manager aanwezig ({kind})."),
        ),
    }
}

pub(crate) fn has_opengds(data: &ListingData, _: &Thresholds) -> Outcome {
    if data.channel_manager_type.is_none() {
        return Outcome::not_applicable(NOT_VISIBLE);
    }
    if data.channel_manager().manages_availability() {
        Outcome::points(OPENGDS_BONUS, "OpenGDS-integratie.")
    } else {
        Outcome::points(0, "Geen OpenGDS.")
    }
}

pub(crate) fn icals_working(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let (Some(errors), Some(total)) = (data.nr_icals_error, data.nr_icals_total) else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    if errors == 0 && total > 0 {
        let feeds = i32::try_from(total).unwrap_or(i32::MAX);
        let bonus = feeds
            .saturating_mul(ical_weight(total))
            .min(thresholds.ical_bonus_cap);
        Outcome::points(bonus, format!("iCals werken ({total} feeds)."))
    } else {
        Outcome::points(0, "Geen werkende iCals of iCal-fouten.")
    }
}

pub(crate) fn short_stay(data: &ListingData, _: &Thresholds) -> Outcome {
    unless_gds_managed(data, || {
        flag_points(
            data.has_short_stay_types,
            SHORT_STAY_BONUS,
            "Korte verblijven mogelijk.",
            "Geen korte verblijven.",
        )
    })
}

pub(crate) fn priceplan_recent(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let (Some(years), Some(months)) = (data.years_platform, data.months_updated_priceplan) else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    if years > 0.0 && months <= thresholds.recent_update_months {
        Outcome::points(
            RECENT_UPDATE_BONUS,
            format!("Prijsplan {months} maanden geleden bijgewerkt."),
        )
    } else {
        Outcome::points(0, "Prijsplan niet recent bijgewerkt.")
    }
}

pub(crate) fn agenda_blocks_recent(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let Some(months) = data.months_last_update_blocks else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    if months <= thresholds.recent_update_months {
        Outcome::points(RECENT_UPDATE_BONUS, "Agenda recent bijgewerkt.")
    } else {
        Outcome::points(0, format!("Agenda {months} maanden niet bijgewerkt."))
    }
}

pub(crate) fn only_weeks(data: &ListingData, _: &Thresholds) -> Outcome {
    unless_gds_managed(data, || {
        flag_points(
            data.only_weeks_possible,
            ONLY_WEEKS_MALUS,
            "Alleen weken boekbaar.",
            "Meerdere verblijftypes.",
        )
    })
}

pub(crate) fn only_other_stays(data: &ListingData, _: &Thresholds) -> Outcome {
    unless_gds_managed(data, || {
        flag_points(
            data.only_other_stays_possible,
            ONLY_OTHER_STAYS_MALUS,
            "Alleen 'overige' verblijven boekbaar.",
            "Standaard verblijven mogelijk.",
        )
    })
}

pub(crate) fn icals_not_working(data: &ListingData, _: &Thresholds) -> Outcome {
    let Some(errors) = data.nr_icals_error else {
        return Outcome::not_applicable(NOT_VISIBLE);
    };
    if data.channel_manager().manages_calendar_feeds() {
        return Outcome::not_applicable("iCals worden beheerd door de channel manager.");
    }
    let malus = i32::try_from(errors)
        .unwrap_or(i32::MAX)
        .saturating_mul(ICAL_ERROR_MALUS);
    Outcome::points(malus, format!("Aantal iCal-fouten: {errors}."))
}

pub(crate) fn fully_blocked(data: &ListingData, _: &Thresholds) -> Outcome {
    unless_gds_managed(data, || {
        flag_points(
            data.fully_blocked,
            FULLY_BLOCKED_MALUS,
            "Agenda volledig geblokkeerd.",
            "Niet volledig geblokkeerd.",
        )
    })
}

pub(crate) fn fully_nonbookable(data: &ListingData, _: &Thresholds) -> Outcome {
    unless_gds_managed(data, || {
        flag_points(
            data.fully_nonbookable,
            FULLY_NONBOOKABLE_MALUS,
            "Volledig niet boekbaar.",
            "Boekbaar.",
        )
    })
}

pub(crate) fn fully_available(data: &ListingData, _: &Thresholds) -> Outcome {
    unless_gds_managed(data, || {
        flag_points(
            data.fully_available,
            FULLY_AVAILABLE_MALUS,
            "Volledig beschikbaar, agenda lijkt niet ingericht.",
            "Agenda ingericht.",
        )
    })
}

pub(crate) fn months_updated(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    unless_gds_managed(data, || match data.months_updated {
        Some(months) if months > thresholds.stale_update_months => Outcome::points(
            STALE_UPDATE_MALUS,
            format!("Laatste update {months} maanden geleden."),
        ),
        Some(months) => Outcome::points(0, format!("Laatste update {months} maanden geleden.")),
        None => Outcome::not_applicable(NOT_VISIBLE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_manager(kind: &str) -> ListingData {
        ListingData {
            channel_manager_type: Some(kind.to_string()),
            nr_icals_error: Some(2),
            nr_icals_total: Some(3),
            fully_blocked: Some(true),
            ..ListingData::default()
        }
    }

    #[test]
    fn ical_weight_depends_on_feed_count() {
        let t = Thresholds::standard();
        let cases = [(1, 4), (2, 6), (3, 6), (4, 8), (10, 8)];
        for (total, expected) in cases {
            let data = ListingData {
                nr_icals_error: Some(0),
                nr_icals_total: Some(total),
                ..ListingData::default()
            };
            assert_eq!(
                icals_working(&data, &t),
                Outcome::points(expected, format!("iCals werken ({total} feeds)."))
            );
        }
    }

    #[test]
    fn smoobu_only_suppresses_ical_errors() {
        let t = Thresholds::standard();
        let data = with_manager("smoobu");
        assert!(matches!(icals_not_working(&data, &t), Outcome::NotApplicable(_)));
        assert!(matches!(
            fully_blocked(&data, &t),
            Outcome::Points { score: -30, .. }
        ));
    }

    #[test]
    fn ical_errors_scale_by_ten() {
        let t = Thresholds::standard();
        let data = with_manager("Lodgify");
        assert!(matches!(
            icals_not_working(&data, &t),
            Outcome::Points { score: -20, .. }
        ));
    }

    #[test]
    fn opengds_suppresses_managed_calendar_rules() {
        let t = Thresholds::standard();
        let data = with_manager("OPENGDS");
        assert!(matches!(fully_blocked(&data, &t), Outcome::NotApplicable(_)));
        assert!(matches!(icals_not_working(&data, &t), Outcome::NotApplicable(_)));
        assert!(matches!(
            has_opengds(&data, &t),
            Outcome::Points { score: 10, .. }
        ));
    }
}
