//! Input helpers shared by the rule evaluators. They never panic on malformed text;
//! callers turn a `None` into a not-applicable item.

use lazy_static::lazy_static;
use regex::Regex;

/// Bounds for postcodes of countries without a dedicated pattern.
pub const POSTCODE_MIN_LEN: usize = 4;
pub const POSTCODE_MAX_LEN: usize = 10;

lazy_static! {
    static ref POSTCODE_NL: Regex = Regex::new(r"^[0-9]{4}[A-Za-z]{2}$").unwrap();
    static ref POSTCODE_BE: Regex = Regex::new(r"^[0-9]{4}$").unwrap();
    static ref POSTCODE_DE_FR: Regex = Regex::new(r"^[0-9]{5}$").unwrap();
    static ref ALPHA_WORD: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Character count of the trimmed text.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Present and not just whitespace.
pub fn has_text(text: Option<&str>) -> bool {
    text.map(|value| !value.trim().is_empty()).unwrap_or(false)
}

/// Alphabetic words of at least `min_len` letters written entirely in capitals.
pub fn capslock_words(text: &str, min_len: usize) -> usize {
    ALPHA_WORD
        .find_iter(text)
        .map(|word| word.as_str())
        .filter(|word| word.len() >= min_len && word.chars().all(|c| c.is_ascii_uppercase()))
        .count()
}

pub fn postcode_pattern(country: Option<&str>) -> Option<&'static Regex> {
    let code: String = country
        .unwrap_or_default()
        .trim()
        .to_uppercase()
        .chars()
        .take(2)
        .collect();
    match code.as_str() {
        "NL" => Some(&*POSTCODE_NL),
        "BE" => Some(&*POSTCODE_BE),
        "DE" | "FR" => Some(&*POSTCODE_DE_FR),
        _ => None,
    }
}

/// Validate a postcode for the given country; countries without a pattern only get a
/// length check.
pub fn is_valid_postcode(postcode: &str, country: Option<&str>) -> bool {
    let compact: String = postcode.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return false;
    }
    match postcode_pattern(country) {
        Some(pattern) => pattern.is_match(&compact),
        None => (POSTCODE_MIN_LEN..=POSTCODE_MAX_LEN).contains(&compact.chars().count()),
    }
}

/// Hour component of an `HH:MM` or `HH:MM:SS` string.
pub fn parse_hour(raw: &str) -> Option<u32> {
    let hour = raw.trim().split(':').next()?.trim();
    if hour.is_empty() {
        return None;
    }
    hour.parse::<u32>().ok().filter(|hour| *hour < 24)
}

/// Placeholder midnight moment, as left behind by unset time pickers.
pub fn is_midnight_placeholder(raw: &str) -> bool {
    matches!(raw.trim(), "00:00" | "00:00:00")
}

/// Non-empty, trimmed entries of a comma separated accommodation type list.
pub fn accommodation_types(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_len_counts_characters_not_bytes() {
        assert_eq!(trimmed_len("  café  "), 4);
        assert_eq!(trimmed_len("   "), 0);
    }

    #[test]
    fn capslock_counts_only_long_uppercase_words() {
        let text = "PRACHTIGE villa met UITZICHT op het BOS en WEILANDEN";
        assert_eq!(capslock_words(text, 8), 3);
        assert_eq!(capslock_words("HELLO WORLD", 8), 0);
        assert_eq!(capslock_words("Vakantiehuis", 8), 0);
    }

    #[test]
    fn dutch_postcodes() {
        assert!(is_valid_postcode("1234 AB", Some("NL")));
        assert!(is_valid_postcode("1234ab", Some("nl")));
        assert!(!is_valid_postcode("abc", Some("NL")));
        assert!(!is_valid_postcode("12345", Some("NL")));
    }

    #[test]
    fn belgian_german_and_french_postcodes() {
        assert!(is_valid_postcode("1000", Some("BE")));
        assert!(!is_valid_postcode("10000", Some("BE")));
        assert!(is_valid_postcode("10115", Some("DE")));
        assert!(is_valid_postcode("75001", Some("FR")));
        assert!(!is_valid_postcode("7500", Some("FR")));
    }

    #[test]
    fn unknown_country_falls_back_to_length() {
        assert!(is_valid_postcode("SW1A 1AA", Some("GB")));
        assert!(is_valid_postcode("1234", None));
        assert!(!is_valid_postcode("123", None));
        assert!(!is_valid_postcode("12345678901", None));
        assert!(!is_valid_postcode("   ", None));
    }

    #[test]
    fn hours_parse_from_time_strings() {
        assert_eq!(parse_hour("08:00"), Some(8));
        assert_eq!(parse_hour("22:30:00"), Some(22));
        assert_eq!(parse_hour("late"), None);
        assert_eq!(parse_hour(""), None);
        assert_eq!(parse_hour("25:00"), None);
    }

    #[test]
    fn accommodation_type_list_ignores_blanks() {
        assert_eq!(accommodation_types("villa, bungalow,, "), vec!["villa", "bungalow"]);
    }
}
