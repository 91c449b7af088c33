use scraper::{Html, Selector};
use serde_json::Value;

const LISTING_TYPES: [&str; 3] = ["Accommodation", "LodgingBusiness", "Product"];

/// Listing facts published as schema.org JSON-LD.
#[derive(Debug, Default, Clone, PartialEq)]
pub(super) struct JsonLdListing {
    pub postal_code: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
    pub review_count: Option<u32>,
    pub rating_value: Option<f64>,
    pub best_rating: Option<f64>,
    pub image_count: Option<u32>,
}

/// All JSON-LD objects on the page, flattening arrays and `@graph` containers.
/// Scripts that fail to parse are skipped.
fn blocks(document: &Html) -> Vec<Value> {
    let Ok(selector) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for script in document.select(&selector) {
        let raw: String = script.text().collect();
        if let Ok(value) = serde_json::from_str::<Value>(raw.trim()) {
            flatten(value, &mut out);
        }
    }
    out
}

fn flatten(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(values) => values.into_iter().for_each(|value| flatten(value, out)),
        Value::Object(mut map) => {
            if let Some(graph) = map.remove("@graph") {
                flatten(graph, out);
            }
            out.push(Value::Object(map));
        }
        _ => {}
    }
}

fn is_listing(block: &Value) -> bool {
    match block.get("@type") {
        Some(Value::String(kind)) => LISTING_TYPES.contains(&kind.as_str()),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| LISTING_TYPES.contains(&kind)),
        _ => false,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    let raw = match value? {
        Value::String(raw) => raw.trim().to_string(),
        Value::Number(number) => number.to_string(),
        // addressCountry may be a Country object.
        Value::Object(map) => return text(map.get("name")),
        _ => return None,
    };
    (!raw.is_empty()).then_some(raw)
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

fn count(value: Option<&Value>) -> Option<u32> {
    number(value)
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value.round() as u32)
}

pub(super) fn extract(document: &Html) -> JsonLdListing {
    let mut listing = JsonLdListing::default();
    for block in blocks(document).iter().filter(|block| is_listing(block)) {
        if let Some(address) = block.get("address").filter(|address| address.is_object()) {
            listing.postal_code = listing.postal_code.or(text(address.get("postalCode")));
            listing.locality = listing.locality.or(text(address.get("addressLocality")));
            listing.country = listing.country.or(text(address.get("addressCountry")));
        }
        if let Some(rating) = block.get("aggregateRating").filter(|rating| rating.is_object()) {
            listing.review_count = listing
                .review_count
                .or(count(rating.get("reviewCount")))
                .or(count(rating.get("ratingCount")));
            listing.rating_value = listing.rating_value.or(number(rating.get("ratingValue")));
            listing.best_rating = listing.best_rating.or(number(rating.get("bestRating")));
        }
        let images = match block.get("image") {
            Some(Value::Array(images)) => u32::try_from(images.len()).ok(),
            Some(Value::String(_)) | Some(Value::Object(_)) => Some(1),
            _ => None,
        };
        listing.image_count = listing.image_count.or(images);
    }
    listing
}
