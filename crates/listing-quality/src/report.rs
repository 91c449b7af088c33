use crate::lqm::{
    summary_by_category, total_score, Category, CategorySummary, ListingData, ScoreItem,
};
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Scored listing as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ListingReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub total_lqm_score: i32,
    pub items: Vec<ScoreItem>,
    #[serde(serialize_with = "by_label")]
    pub by_category: BTreeMap<Category, CategorySummary>,
    pub extracted: ListingData,
    pub generated_at: DateTime<Utc>,
}

/// Categories keyed by their display label, in report order.
fn by_label<S: Serializer>(
    summaries: &BTreeMap<Category, CategorySummary>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(summaries.len()))?;
    for (category, summary) in summaries {
        map.serialize_entry(category.label(), summary)?;
    }
    map.end()
}

impl ListingReport {
    pub fn build(url: Option<String>, extracted: ListingData, items: Vec<ScoreItem>) -> Self {
        Self {
            ok: true,
            url,
            total_lqm_score: total_score(&items),
            by_category: summary_by_category(&items),
            items,
            extracted,
            generated_at: Utc::now(),
        }
    }

    /// Failed advisory items with their recommendation, in report order.
    pub fn recommendations(&self) -> Vec<(&'static str, &str)> {
        self.items
            .iter()
            .filter(|item| item.passed() == Some(false))
            .filter_map(|item| Some((item.attribute(), item.recommendation()?)))
            .collect()
    }

    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.by_category.get(&category)
    }
}
