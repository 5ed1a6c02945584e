//! Search Filter
//!
//! Label substring matching for the item list.

use crate::models::Item;

/// Normalized search term (lowercased, trimmed)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A non-empty term switches plain clicks to toggle mode
    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    /// Matches against the displayed label, deleted marker included
    pub fn matches(&self, item: &Item) -> bool {
        self.0.is_empty() || item.display_label().to_lowercase().contains(&self.0)
    }
}

/// Items passing the filter, in display order
pub fn visible_items<'a>(items: &'a [Item], term: &SearchTerm) -> Vec<&'a Item> {
    items.iter().filter(|item| term.matches(item)).collect()
}
