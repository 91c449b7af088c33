use super::domain::{Category, ScoreItem, ScoreKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sum of the item scores outside the advisory categories.
pub fn total_score(items: &[ScoreItem]) -> i32 {
    items
        .iter()
        .filter(|item| !item.category().is_advisory())
        .map(ScoreItem::score)
        .sum()
}

/// Per-category roll-up of evaluated items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    #[serde(skip)]
    pub category: Category,
    pub bonus: i32,
    pub malus: i32,
    pub advisory: bool,
    /// Advisory categories only: every applicable verdict passed (`Some(true)`), at least
    /// one failed (`Some(false)`), or nothing was applicable (`None`).
    pub all_passed: Option<bool>,
    pub items: Vec<ScoreItem>,
}

impl CategorySummary {
    fn empty(category: Category) -> Self {
        Self {
            category,
            bonus: 0,
            malus: 0,
            advisory: category.is_advisory(),
            all_passed: None,
            items: Vec::new(),
        }
    }

    fn push(&mut self, item: &ScoreItem) {
        if !self.advisory {
            match item.kind() {
                ScoreKind::Bonus => self.bonus += item.score(),
                ScoreKind::Malus => self.malus += item.score(),
                ScoreKind::Advisory => {}
            }
        }
        self.items.push(item.clone());
    }

    fn settle_verdict(&mut self) {
        if !self.advisory {
            return;
        }
        let mut verdicts = self
            .items
            .iter()
            .filter(|item| !item.is_not_applicable())
            .filter_map(ScoreItem::passed)
            .peekable();
        self.all_passed = verdicts.peek().is_some().then(|| verdicts.all(|passed| passed));
    }

    /// Applicable items that did not pass, for advisory categories.
    pub fn failed(&self) -> impl Iterator<Item = &ScoreItem> {
        self.items.iter().filter(|item| item.passed() == Some(false))
    }
}

/// Group items by category, keeping the item order within each group.
pub fn summary_by_category(items: &[ScoreItem]) -> BTreeMap<Category, CategorySummary> {
    let mut summaries: BTreeMap<Category, CategorySummary> = BTreeMap::new();
    for item in items {
        summaries
            .entry(item.category())
            .or_insert_with(|| CategorySummary::empty(item.category()))
            .push(item);
    }
    summaries
        .values_mut()
        .for_each(CategorySummary::settle_verdict);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(passed: bool) -> ScoreItem {
        ScoreItem::verdict(
            "check",
            Category::Photos,
            passed,
            String::new(),
            Some("fix".to_string()),
        )
    }

    #[test]
    fn advisory_verdict_is_three_valued() {
        let na = ScoreItem::not_applicable(
            "na",
            Category::Photos,
            ScoreKind::Advisory,
            String::new(),
        );

        let all_na = summary_by_category(&[na.clone()]);
        assert_eq!(all_na[&Category::Photos].all_passed, None);

        let passing = summary_by_category(&[na.clone(), verdict(true)]);
        assert_eq!(passing[&Category::Photos].all_passed, Some(true));

        let failing = summary_by_category(&[verdict(true), na, verdict(false)]);
        assert_eq!(failing[&Category::Photos].all_passed, Some(false));
        assert_eq!(failing[&Category::Photos].failed().count(), 1);
    }

    #[test]
    fn bonus_and_malus_are_split() {
        let items = vec![
            ScoreItem::points("a", Category::Filters, ScoreKind::Malus, -3, String::new()),
            ScoreItem::points("b", Category::Filters, ScoreKind::Malus, -7, String::new()),
            ScoreItem::points("c", Category::Impact, ScoreKind::Bonus, 3, String::new()),
        ];
        let summary = summary_by_category(&items);
        assert_eq!(summary[&Category::Filters].malus, -10);
        assert_eq!(summary[&Category::Filters].bonus, 0);
        assert_eq!(summary[&Category::Impact].bonus, 3);
        assert_eq!(summary[&Category::Impact].all_passed, None);
        assert_eq!(total_score(&items), -7);
    }
}
