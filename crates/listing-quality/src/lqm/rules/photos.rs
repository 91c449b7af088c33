use super::flag_verdict;
use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;

const NO_IMAGE_ANALYSIS: &str = "Geen beeldanalyse beschikbaar.";

pub(crate) fn photo_count(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let Some(count) = data.photo_count else {
        return Outcome::not_applicable("Aantal foto's niet bepaald.");
    };
    let (min, max) = (thresholds.photo_count_min, thresholds.photo_count_max);
    if count < min {
        Outcome::fail(
            format!("{count} foto's (minimaal {min})."),
            format!("Voeg foto's toe tot minimaal {min}: exterieur, interieur en omgeving."),
        )
    } else if count > max {
        Outcome::fail(
            format!("{count} foto's (maximaal {max})."),
            format!("Beperk de galerij tot de {max} sterkste foto's."),
        )
    } else {
        Outcome::pass(format!("{count} foto's, binnen {min} tot {max}."))
    }
}

pub(crate) fn click_through_rate(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    match data.ctr {
        Some(ctr) if ctr > thresholds.ctr_poor => {
            Outcome::pass(format!("Klikratio {:.2}%.", ctr * 100.0))
        }
        Some(ctr) if ctr > thresholds.ctr_no_data => Outcome::fail(
            format!("Klikratio laag: {:.2}%.", ctr * 100.0),
            "Kies een sterkere coverfoto; de eerste foto bepaalt of gasten doorklikken.",
        ),
        // NaN and values at or below the tracking floor carry no signal.
        _ => Outcome::not_applicable("Klikratio niet beschikbaar (tracking)."),
    }
}

pub(crate) fn cover_photo_nature(data: &ListingData, _: &Thresholds) -> Outcome {
    flag_verdict(
        data.cover_photo_suggests_nature,
        "Coverfoto niet te beoordelen (geen alt-tekst).",
        "Coverfoto toont het huisje in de natuur (alt-tekst).",
        "Coverfoto lijkt geen huisje in de natuur (alt-tekst).",
        "Kies als coverfoto een buitenfoto van het huisje in zijn natuurlijke omgeving.",
    )
}

pub(crate) fn first_photo_exterior(data: &ListingData, _: &Thresholds) -> Outcome {
    match data.first_photo_exterior() {
        Some((true, source)) => Outcome::pass(format!(
            "Eerste foto is een buitenfoto ({}).",
            source.label()
        )),
        Some((false, source)) => Outcome::fail(
            format!("Eerste foto is een interieurfoto ({}).", source.label()),
            "Begin de galerij met een buitenfoto van het huisje.",
        ),
        None => Outcome::not_applicable("Eerste foto niet te beoordelen."),
    }
}

pub(crate) fn no_watermark(data: &ListingData, _: &Thresholds) -> Outcome {
    flag_verdict(
        data.vision_has_watermark.map(|watermark| !watermark),
        NO_IMAGE_ANALYSIS,
        "Eerste foto heeft geen watermerk.",
        "Eerste foto heeft een watermerk.",
        "Gebruik een foto zonder watermerk of logo.",
    )
}

pub(crate) fn no_collage(data: &ListingData, _: &Thresholds) -> Outcome {
    flag_verdict(
        data.vision_is_collage.map(|collage| !collage),
        NO_IMAGE_ANALYSIS,
        "Eerste foto is geen collage.",
        "Eerste foto is een collage.",
        "Gebruik als eerste foto één beeld in plaats van een collage.",
    )
}

pub(crate) fn resolution(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let (Some(width), Some(height)) = (data.first_photo_width, data.first_photo_height) else {
        return Outcome::not_applicable("Resolutie van de eerste foto onbekend.");
    };
    let (min_w, min_h) = (thresholds.min_photo_width, thresholds.min_photo_height);
    if width >= min_w && height >= min_h {
        Outcome::pass(format!("Eerste foto is {width}x{height} pixels."))
    } else {
        Outcome::fail(
            format!("Eerste foto is {width}x{height} pixels (minimaal {min_w}x{min_h})."),
            format!("Upload de eerste foto in minimaal {min_w}x{min_h} pixels."),
        )
    }
}
