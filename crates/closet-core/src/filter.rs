//! Filter/Search Engine
//!
//! Derives the visible subset of the catalog. A non-empty query wins over
//! the category filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Item;

/// Rent or buy view. Picks the displayed price, never which items match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Rent,
    #[default]
    Buy,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Rent => "rent",
            ViewMode::Buy => "buy",
        }
    }

    /// Price shown on a card in this mode
    pub fn price_of(&self, item: &Item) -> f64 {
        match self {
            ViewMode::Rent => item.price_rent,
            ViewMode::Buy => item.price_buy,
        }
    }

    pub fn price_caption(&self) -> &'static str {
        match self {
            ViewMode::Rent => "per day",
            ViewMode::Buy => "buy now",
        }
    }

    pub fn card_action(&self) -> &'static str {
        match self {
            ViewMode::Rent => "Rent Now",
            ViewMode::Buy => "Buy Now",
        }
    }
}

/// Category/tag filter; a single value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Matches a tag exactly, or a category name case-insensitively
    Value(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Value(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Value(v) => v,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Value(v) => {
                item.has_tag(v) || item.category.as_str().to_lowercase() == v.to_lowercase()
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    /// Update the query. Typing something also drops the category filter.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        if !query.is_empty() {
            self.category = CategoryFilter::All;
        }
    }

    pub fn set_category(&mut self, value: &str) {
        self.category = CategoryFilter::from_value(value);
    }

    /// Back to the full catalog (empty-state action)
    pub fn reset(&mut self) {
        self.category = CategoryFilter::All;
        self.query.clear();
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if self.is_searching() {
            query_matches(&self.query, item)
        } else {
            self.category.matches(item)
        }
    }
}

/// Case-insensitive substring match on title, tags, or category
fn query_matches(query: &str, item: &Item) -> bool {
    let query = query.to_lowercase();
    item.title.to_lowercase().contains(&query)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        || item.category.as_str().to_lowercase().contains(&query)
}

/// Visible items in catalog order
pub fn filter_items<'a>(items: &'a [Item], filter: &FilterState) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;
    use crate::seed::seed_items;

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn test_all_returns_everything() {
        let items = seed_items();
        let visible = filter_items(&items, &FilterState::default());
        assert_eq!(visible.len(), items.len());
    }

    #[test]
    fn test_query_gala() {
        let items = seed_items();
        let mut filter = FilterState::default();
        filter.set_query("gala");
        let visible = filter_items(&items, &filter);
        assert!(!visible.is_empty());
        for item in &visible {
            let hit = item.title.to_lowercase().contains("gala")
                || item.tags.iter().any(|t| t.contains("gala"))
                || item.category.as_str().to_lowercase().contains("gala");
            assert!(hit, "{} should not match", item.title);
        }
        assert_eq!(ids(&visible), vec![1, 2, 7]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = seed_items();
        let mut filter = FilterState::default();
        filter.set_query("WOOL");
        assert_eq!(ids(&filter_items(&items, &filter)), vec![4]);

        filter.set_query("Outer");
        assert_eq!(ids(&filter_items(&items, &filter)), vec![4, 5]);
    }

    #[test]
    fn test_query_overrides_category() {
        let items = seed_items();
        let mut filter = FilterState::default();
        filter.set_category("accessories");
        filter.query = "coat".to_string();
        assert_eq!(ids(&filter_items(&items, &filter)), vec![4]);
    }

    #[test]
    fn test_typing_query_resets_category() {
        let mut filter = FilterState::default();
        filter.set_category("gala");
        filter.set_query("");
        assert_eq!(filter.category, CategoryFilter::Value("gala".into()));
        filter.set_query("s");
        assert_eq!(filter.category, CategoryFilter::All);
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let items = seed_items();
        let mut filter = FilterState::default();
        filter.set_query("tuxedo-xyz");
        assert!(filter_items(&items, &filter).is_empty());

        filter.reset();
        assert_eq!(filter_items(&items, &filter).len(), items.len());
    }

    #[test]
    fn test_category_filter_tag_or_category() {
        let items = seed_items();
        let mut filter = FilterState::default();

        filter.set_category("interview");
        assert_eq!(ids(&filter_items(&items, &filter)), vec![2, 3, 6]);

        filter.set_category("Outerwear");
        assert_eq!(ids(&filter_items(&items, &filter)), vec![4, 5]);
    }

    #[test]
    fn test_view_mode_does_not_affect_matching() {
        let items = seed_items();
        let filter = FilterState::default();
        let visible = filter_items(&items, &filter);
        let item = items.iter().find(|i| i.id == ItemId(4)).unwrap();
        assert_eq!(ViewMode::Rent.price_of(item), 6.0);
        assert_eq!(ViewMode::Buy.price_of(item), 90.0);
        assert_eq!(visible.len(), items.len());
    }
}
