//! Gallery heuristics driven by `<img>` attributes.

use scraper::ElementRef;

const SKIP_MARKERS: [&str; 8] = [
    "logo",
    "icon",
    "avatar",
    "sprite",
    "pixel",
    "tracking",
    "1x1",
    "placeholder",
];
const NATURE_WORDS: [&str; 10] = [
    "natuur", "nature", "bos", "forest", "weide", "veld", "landschap", "landscape", "buiten",
    "outdoor",
];
const HOUSE_WORDS: [&str; 8] = [
    "huis",
    "house",
    "cottage",
    "chalet",
    "bungalow",
    "villa",
    "accommodatie",
    "cabin",
];
const INTERIOR_WORDS: [&str; 12] = [
    "interieur",
    "interior",
    "woonkamer",
    "living",
    "slaapkamer",
    "bedroom",
    "keuken",
    "kitchen",
    "badkamer",
    "bathroom",
    "binnen",
    "indoor",
];
const EXTERIOR_WORDS: [&str; 4] = ["buiten", "exterior", "facade", "gevel"];
/// Alt texts longer than this are descriptive enough to count as a negative signal.
const DESCRIPTIVE_ALT_LEN: usize = 10;

/// One candidate listing photo.
#[derive(Debug, Clone)]
pub(super) struct ListingImage {
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ListingImage {
    /// Lowercased alt and src, the text every heuristic looks at.
    fn haystack(&self) -> String {
        format!("{} {}", self.alt, self.src).to_lowercase()
    }

    /// Does the cover photo suggest a house in nature? Derived from alt text and file name.
    pub fn suggests_nature(&self) -> Option<bool> {
        let text = self.haystack();
        if text.trim().is_empty() {
            return None;
        }
        let nature = NATURE_WORDS.iter().any(|word| text.contains(word));
        let house = HOUSE_WORDS.iter().any(|word| text.contains(word));
        if nature || house {
            Some(true)
        } else if self.alt.trim().chars().count() > DESCRIPTIVE_ALT_LEN {
            Some(false)
        } else {
            None
        }
    }

    /// Exterior shot of the house rather than an interior. Interior words win.
    pub fn shows_exterior(&self) -> Option<bool> {
        let text = self.haystack();
        if INTERIOR_WORDS.iter().any(|word| text.contains(word)) {
            Some(false)
        } else if EXTERIOR_WORDS
            .iter()
            .chain(HOUSE_WORDS.iter())
            .chain(NATURE_WORDS.iter())
            .any(|word| text.contains(word))
        {
            Some(true)
        } else {
            None
        }
    }
}

fn dimension(element: &ElementRef<'_>, names: [&str; 2]) -> Option<u32> {
    names.iter().find_map(|name| {
        let digits: String = element
            .value()
            .attr(name)?
            .chars()
            .take_while(|c| c.is_ascii_digit() || c.is_whitespace())
            .filter(char::is_ascii_digit)
            .collect();
        digits.parse::<u32>().ok().filter(|value| *value > 0)
    })
}

/// Image elements that belong to the listing, skipping logos, icons and trackers.
pub(super) fn listing_image(element: ElementRef<'_>) -> Option<ListingImage> {
    let src = element
        .value()
        .attr("src")
        .or_else(|| element.value().attr("data-src"))?
        .trim();
    let alt = element.value().attr("alt").unwrap_or_default().trim();
    let lowered = format!("{src} {alt}").to_lowercase();
    if SKIP_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return None;
    }
    let usable = src.starts_with("data:image")
        || src.starts_with("http")
        || src.starts_with("//")
        || src.starts_with('/');
    if !usable {
        return None;
    }
    Some(ListingImage {
        src: src.to_string(),
        alt: alt.to_string(),
        width: dimension(&element, ["width", "data-width"]),
        height: dimension(&element, ["height", "data-height"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(alt: &str, src: &str) -> ListingImage {
        ListingImage {
            src: src.to_string(),
            alt: alt.to_string(),
            width: None,
            height: None,
        }
    }

    #[test]
    fn nature_hint_from_alt_text() {
        assert_eq!(image("Chalet aan de bosrand", "/a.jpg").suggests_nature(), Some(true));
        assert_eq!(
            image("Overzicht van de parkeerplaats", "/a.jpg").suggests_nature(),
            Some(false)
        );
        assert_eq!(image("", "/img/123.jpg").suggests_nature(), None);
    }

    #[test]
    fn interior_words_win_over_house_words() {
        assert_eq!(
            image("Woonkamer van het vakantiehuis", "/a.jpg").shows_exterior(),
            Some(false)
        );
        assert_eq!(image("Vakantiehuis De Eik", "/a.jpg").shows_exterior(), Some(true));
        assert_eq!(image("", "/img/123.jpg").shows_exterior(), None);
    }
}
