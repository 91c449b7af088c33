use crate::lqm::catalog::Outcome;
use crate::lqm::domain::ListingData;
use crate::lqm::thresholds::Thresholds;
use crate::lqm::validation::{capslock_words, has_text, trimmed_len};

struct TextRequirement<'a> {
    label: &'a str,
    min_chars: usize,
    topic: &'a str,
}

fn text_length(text: Option<&str>, requirement: TextRequirement<'_>, preferred: usize) -> Outcome {
    let TextRequirement {
        label,
        min_chars,
        topic,
    } = requirement;
    let Some(text) = text.filter(|text| has_text(Some(text))) else {
        return Outcome::fail(
            format!("{label} ontbreekt."),
            format!(
                "Voeg een {} toe van minimaal {min_chars} tekens (bij voorkeur meer dan {preferred}). {topic}",
                label.to_lowercase()
            ),
        );
    };
    let len = trimmed_len(text);
    if len < min_chars {
        Outcome::fail(
            format!("{label} is {len} tekens (minimaal {min_chars})."),
            format!(
                "Maak de {} langer: minimaal {min_chars} tekens (bij voorkeur meer dan {preferred}). Nu: {len} tekens.",
                label.to_lowercase()
            ),
        )
    } else {
        Outcome::pass(format!("{label} is lang genoeg ({len} tekens)."))
    }
}

pub(crate) fn general_length(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    text_length(
        data.general_description.as_deref(),
        TextRequirement {
            label: "Algemene beschrijving",
            min_chars: thresholds.min_general_description_chars,
            topic: "Beschrijf het huisje, de voorzieningen en wat gasten kunnen verwachten.",
        },
        thresholds.preferred_description_chars,
    )
}

pub(crate) fn nature_length(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    text_length(
        data.nature_description.as_deref(),
        TextRequirement {
            label: "Natuurbeschrijving",
            min_chars: thresholds.min_nature_description_chars,
            topic: "Beschrijf het landschap en de natuur rond het huisje.",
        },
        thresholds.preferred_description_chars,
    )
}

pub(crate) fn texts_differ(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let (Some(general), Some(nature)) = (
        data.general_description.as_deref(),
        data.nature_description.as_deref(),
    ) else {
        return Outcome::not_applicable("Niet beide beschrijvingen aanwezig.");
    };
    if trimmed_len(general) > thresholds.identical_text_min_chars && general.trim() == nature.trim()
    {
        Outcome::fail(
            "Algemene beschrijving en natuurbeschrijving zijn identiek.",
            "Schrijf een eigen tekst voor de natuurbeschrijving over landschap en omgeving; \
             houd de algemene beschrijving voor het huisje zelf.",
        )
    } else {
        Outcome::pass("Algemene beschrijving en natuurbeschrijving verschillen.")
    }
}

pub(crate) fn no_capslock(data: &ListingData, thresholds: &Thresholds) -> Outcome {
    let texts: Vec<&str> = [
        data.general_description.as_deref(),
        data.nature_description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|text| has_text(Some(text)))
    .collect();
    if texts.is_empty() {
        return Outcome::not_applicable("Geen tekst om te controleren.");
    }
    let count: usize = texts
        .iter()
        .map(|text| capslock_words(text, thresholds.capslock_word_min_len))
        .sum();
    if count >= thresholds.capslock_max_words {
        Outcome::fail(
            format!("Er staan {count} lange woorden in HOOFDLETTERS."),
            "Vermijd lange woorden in hoofdletters; gebruik alleen een hoofdletter aan het begin \
             van een zin of eigennaam.",
        )
    } else {
        Outcome::pass("Geen overmatig gebruik van hoofdletters.")
    }
}
