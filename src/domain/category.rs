//! The canonical set of expense categories shared by the entry form and the
//! list filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Expense categories. Income records never carry one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    /// Stable lower-case identifier used by the presentation layer.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    /// Display hint for the list row icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "coffee",
            Category::Transport => "truck",
            Category::Shopping => "shopping-bag",
            Category::Bills => "file-text",
            Category::Entertainment => "film",
            Category::Health => "heart",
            Category::Other => "dollar-sign",
        }
    }

    /// Looks up a category by id or label, ignoring case and surrounding
    /// whitespace.
    pub fn resolve(raw: &str) -> Option<Category> {
        let needle = raw.trim();
        Self::ALL.into_iter().find(|category| {
            category.id().eq_ignore_ascii_case(needle)
                || category.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::resolve(s).ok_or_else(|| TrackerError::UnknownCategory(s.to_string()))
    }
}

/// Selection applied to the transaction list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_ID: &'static str = "All";

    /// Parses a filter-bar selection: `"All"` or any category id/label.
    pub fn parse(raw: &str) -> Option<CategoryFilter> {
        if raw.trim().eq_ignore_ascii_case(Self::ALL_ID) {
            return Some(CategoryFilter::All);
        }
        Category::resolve(raw).map(CategoryFilter::Only)
    }

    /// Filter-bar options in display order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_ids_and_labels_in_any_case() {
        assert_eq!(Category::resolve("bills"), Some(Category::Bills));
        assert_eq!(Category::resolve(" Food "), Some(Category::Food));
        assert_eq!(Category::resolve("HEALTH"), Some(Category::Health));
        assert_eq!(Category::resolve("groceries"), None);
    }

    #[test]
    fn default_category_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn from_str_reports_unknown_category() {
        let err = "Travel".parse::<Category>().expect_err("unknown category");
        assert!(matches!(err, TrackerError::UnknownCategory(ref raw) if raw == "Travel"));
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), Category::ALL.len() + 1);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::Only(Category::Food));
    }

    #[test]
    fn filter_parse_handles_all_and_categories() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Bills"),
            Some(CategoryFilter::Only(Category::Bills))
        );
        assert_eq!(CategoryFilter::parse("nope"), None);
    }
}
