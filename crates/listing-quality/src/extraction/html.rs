use super::images::{listing_image, ListingImage};
use super::json_ld::{self, JsonLdListing};
use crate::lqm::ListingData;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

const GENERAL_SELECTORS: [&str; 8] = [
    "[data-testid='description']",
    ".description",
    ".listing-description",
    ".property-description",
    "[class*='description']",
    "article p",
    ".content p",
    "main p",
];
const NATURE_SELECTORS: [&str; 4] = [
    "[class*='nature']",
    "[id*='nature']",
    "[data-section='nature']",
    ".nature-description",
];
const PLACE_SELECTORS: [&str; 5] = [
    "[itemprop='addressLocality']",
    ".address-locality",
    "[class*='location']",
    "[class*='place']",
    "[data-testid='location']",
];
const PARAGRAPH_FALLBACK_CHARS: usize = 5000;
const IMPACT_MAX_POINTS: f64 = 112.0;
/// Minimum impact points for 3, 2 and 1 leaves.
const LEAF_THRESHOLDS: [(f64, u8); 3] = [(90.0, 3), (67.0, 2), (45.0, 1)];
const DEFAULT_RATING_SCALE: u8 = 5;

lazy_static! {
    static ref REVIEW_COUNT: Regex =
        Regex::new(r"(?i)(\d+)\s*(?:reviews?|beoordelingen|beoordeling)\b").unwrap();
    static ref REVIEW_COUNT_AFTER: Regex =
        Regex::new(r"(?i)(?:reviews?|beoordelingen|beoordeling)\s*:?\s*(\d+)").unwrap();
    static ref GEO_META: Regex = Regex::new(r"(?i)geo|place|location").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Result of reading one listing page.
#[derive(Debug, Clone, Default)]
pub struct ExtractedPage {
    pub data: ListingData,
    /// Absolute URL of the first listing photo, for image analysis.
    pub first_photo_url: Option<Url>,
}

fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

fn element_text(element: &ElementRef<'_>) -> String {
    collapse(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text of every element matching any selector, each element at most once.
fn all_text(document: &Html, selectors: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut parts = Vec::new();
    for css in selectors {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        for element in document.select(&selector) {
            // Skip descendants of an element that was already taken.
            if element.ancestors().any(|node| seen.contains(&node.id())) {
                continue;
            }
            if !seen.insert(element.id()) {
                continue;
            }
            let text = element_text(&element);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }
    parts
}

fn first_text(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .map(|element| element_text(&element))
                .find(|text| !text.is_empty())
        })
}

fn non_empty(parts: Vec<String>) -> Option<String> {
    (!parts.is_empty()).then(|| parts.join("\n\n"))
}

fn general_description(document: &Html) -> Option<String> {
    non_empty(all_text(document, &GENERAL_SELECTORS)).or_else(|| {
        non_empty(all_text(document, &["p"]))
            .map(|text| text.chars().take(PARAGRAPH_FALLBACK_CHARS).collect())
    })
}

/// A dedicated nature section, else the general text after its first paragraph.
fn nature_description(document: &Html, general: Option<&str>) -> Option<String> {
    non_empty(all_text(document, &NATURE_SELECTORS)).or_else(|| {
        let paragraphs: Vec<&str> = general?.split("\n\n").collect();
        (paragraphs.len() >= 2).then(|| paragraphs[1..].join("\n\n"))
    })
}

fn place(document: &Html, json_ld: &JsonLdListing) -> Option<String> {
    first_text(document, &PLACE_SELECTORS)
        .or_else(|| {
            let selector = Selector::parse("meta[name][content]").ok()?;
            document
                .select(&selector)
                .filter(|meta| meta.value().attr("name").is_some_and(|name| GEO_META.is_match(name)))
                .filter_map(|meta| meta.value().attr("content"))
                .map(str::trim)
                .find(|content| !content.is_empty())
                .map(str::to_string)
        })
        .or_else(|| json_ld.locality.clone())
}

fn review_count(document: &Html, json_ld: &JsonLdListing) -> Option<u32> {
    json_ld.review_count.or_else(|| {
        let text = collapse(&document.root_element().text().collect::<Vec<_>>().join(" "));
        [&*REVIEW_COUNT, &*REVIEW_COUNT_AFTER]
            .iter()
            .find_map(|pattern| pattern.captures(&text)?.get(1)?.as_str().parse().ok())
    })
}

fn rating_scale(json_ld: &JsonLdListing) -> Option<u8> {
    json_ld.rating_value?;
    Some(
        json_ld
            .best_rating
            .filter(|best| best.is_finite() && (1.0..=255.0).contains(best))
            .map(|best| best.round() as u8)
            .unwrap_or(DEFAULT_RATING_SCALE),
    )
}

/// Leaves from the impact tag score: a percentage, or raw points out of 112.
pub(crate) fn leaves_for_impact(raw: f64) -> u8 {
    let points = if (0.0..=100.0).contains(&raw) {
        raw * IMPACT_MAX_POINTS / 100.0
    } else if (0.0..=IMPACT_MAX_POINTS).contains(&raw) {
        raw
    } else {
        0.0
    };
    LEAF_THRESHOLDS
        .iter()
        .find(|(min, _)| points >= *min)
        .map(|(_, leaves)| *leaves)
        .unwrap_or(0)
}

fn sustainability_leaves(document: &Html) -> Option<u8> {
    let tagged = Selector::parse("nh-impact-house-tag").ok().and_then(|selector| {
        let tag = document.select(&selector).next()?;
        let raw = tag
            .value()
            .attr("percentage")
            .or_else(|| tag.value().attr("points"))?;
        raw.trim().parse::<f64>().ok().map(leaves_for_impact)
    });
    tagged.or_else(|| {
        let text = document
            .root_element()
            .text()
            .collect::<String>()
            .to_lowercase();
        (text.contains("duurzaam") || text.contains("sustainability")).then_some(1)
    })
}

fn instant_booking(document: &Html) -> Option<bool> {
    let selector = Selector::parse("[class*='instant-booking']").ok()?;
    document.select(&selector).next().map(|_| true)
}

fn listing_images(document: &Html) -> Vec<ListingImage> {
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };
    document.select(&selector).filter_map(listing_image).collect()
}

fn resolve(page: &Url, src: &str) -> Option<Url> {
    if src.starts_with("data:") {
        return None;
    }
    page.join(src).ok()
}

/// Harvest every field the page exposes. Fields the page does not show stay `None`.
pub fn extract_from_html(html: &str, url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);
    let json_ld = json_ld::extract(&document);
    let images = listing_images(&document);
    let first = images.first();

    let general_description = general_description(&document);
    let nature_description = nature_description(&document, general_description.as_deref());
    let page_photos = u32::try_from(images.len()).unwrap_or(u32::MAX);

    let data = ListingData {
        nature_description,
        general_description,
        sustainability_impact_level_leaves: sustainability_leaves(&document),
        place: place(&document, &json_ld),
        postcode: json_ld.postal_code.clone(),
        country: json_ld.country.clone(),
        allow_instant_booking: instant_booking(&document),
        photo_count: Some(page_photos.max(json_ld.image_count.unwrap_or(0))),
        cover_photo_suggests_nature: first.and_then(ListingImage::suggests_nature),
        first_photo_house_not_interior: first.and_then(ListingImage::shows_exterior),
        first_photo_width: first.and_then(|image| image.width),
        first_photo_height: first.and_then(|image| image.height),
        nr_reviews: review_count(&document, &json_ld),
        average_rating: json_ld.rating_value,
        rating_scale_max: rating_scale(&json_ld),
        ..ListingData::default()
    };

    ExtractedPage {
        data,
        first_photo_url: first.and_then(|image| resolve(url, &image.src)),
    }
}
