use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;

const REVIEW_ADVICE: &str = "Vraag gasten na hun verblijf actief om een review en reageer \
    op bestaande reviews; recente reviews wegen zwaar bij de keuze van nieuwe gasten.";

/// Always evaluated: reviews are worth asking for whatever the current count.
pub(crate) fn review_recommendation(data: &ListingData, _: &Thresholds) -> Outcome {
    let reason = match data.nr_reviews {
        Some(count) => format!("{count} reviews op de pagina."),
        None => "Aantal reviews niet zichtbaar op pagina.".to_string(),
    };
    Outcome::fail(reason, REVIEW_ADVICE)
}

/// Compliment only: a rating below the threshold is not applicable, never a failure.
pub(crate) fn rating_above_eight(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let (Some(reviews), Some(rating), Some(scale)) =
        (data.nr_reviews, data.average_rating, data.rating_scale_max)
    else {
        return Outcome::not_applicable("Beoordeling niet zichtbaar op pagina.");
    };
    if reviews <= thresholds.min_reviews_for_rating {
        return Outcome::not_applicable(format!(
            "Te weinig reviews ({reviews}) voor een oordeel."
        ));
    }
    let Some(required) = thresholds.rating_threshold(scale) else {
        return Outcome::not_applicable(format!("Onbekende beoordelingsschaal (max {scale})."));
    };
    if rating >= required {
        Outcome::pass(format!("Gemiddelde beoordeling {rating:.1} van {scale}."))
    } else {
        Outcome::not_applicable(format!(
            "Gemiddelde beoordeling {rating:.1} van {scale} onder {required:.1}."
        ))
    }
}

pub(crate) fn recent_reviews(data: &ListingData, _: &Thresholds) -> Outcome {
    match data.nr_reviews_past6months {
        Some(0) => Outcome::fail(
            "Geen reviews in de afgelopen 6 maanden.",
            "Vraag recente gasten om een review.",
        ),
        Some(count) => Outcome::pass(format!("{count} reviews in de afgelopen 6 maanden.")),
        None => Outcome::not_applicable("Recente reviews niet zichtbaar."),
    }
}
