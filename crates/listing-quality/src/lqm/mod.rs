//! Listing Quality Model: a fixed rule catalog evaluated over a partially known listing.
//!
//! Scoring is pure. Every rule yields exactly one [`ScoreItem`] for every record, and a rule
//! missing any of its inputs yields a not-applicable item instead of a partial result.

mod catalog;
mod domain;
mod rules;
mod summary;
mod thresholds;
pub mod validation;

pub use catalog::{rules_for, RuleSpec, CATALOG};
pub use domain::{Category, ChannelManager, ListingData, ScoreItem, ScoreKind, VerdictSource};
pub use summary::{summary_by_category, total_score, CategorySummary};
pub use thresholds::Thresholds;

/// Stateless evaluator that applies the rule catalog to a listing.
#[derive(Debug, Clone, Default)]
pub struct LqmEngine {
    thresholds: Thresholds,
}

impl LqmEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn standard() -> Self {
        Self::new(Thresholds::standard())
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Evaluate every rule, category by category in report order.
    pub fn score_all(&self, data: &ListingData) -> Vec<ScoreItem> {
        Category::ordered()
            .into_iter()
            .flat_map(|category| self.score_category(category, data))
            .collect()
    }

    pub fn score_category(&self, category: Category, data: &ListingData) -> Vec<ScoreItem> {
        rules_for(category)
            .map(|rule| rule.evaluate(data, &self.thresholds))
            .collect()
    }
}

/// Score a listing with the standard thresholds.
pub fn score_all(data: &ListingData) -> Vec<ScoreItem> {
    LqmEngine::standard().score_all(data)
}

#[cfg(test)]
mod tests;
