//! Search and categorical filtering of the supply list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use medsupply_model::{Category, StockStatus, SupplyItem};

/// Label that disables a categorical filter.
pub const ALL: &str = "all";

/// A categorical filter: either everything, or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: FromStr<Err = String>> FromStr for Selection<T> {
    type Err = String;

    /// `all` (any case) selects everything; anything else must parse as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Selection::All);
        }
        s.parse::<T>().map(Selection::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

pub type CategoryFilter = Selection<Category>;
pub type StatusFilter = Selection<StockStatus>;

/// Search term plus category and status filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl SupplyFilter {
    /// A filter that lets every item through.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// True when no filter narrows the list.
    pub fn is_inactive(&self) -> bool {
        self.search.is_empty() && self.category.is_all() && self.status.is_all()
    }

    /// Whether `item` passes the search term and both categorical filters.
    pub fn matches(&self, item: &SupplyItem) -> bool {
        self.matches_lowered(&self.search.to_lowercase(), item)
    }

    /// The visible subset of `items`, in their original order.
    pub fn apply<'a>(&self, items: &'a [SupplyItem]) -> Vec<&'a SupplyItem> {
        let needle = self.search.to_lowercase();
        items
            .iter()
            .filter(|item| self.matches_lowered(&needle, item))
            .collect()
    }

    fn matches_lowered(&self, needle: &str, item: &SupplyItem) -> bool {
        matches_search(needle, item)
            && self.category.accepts(&item.category)
            && self.status.accepts(&item.status())
    }
}

/// `needle` must already be lowercased.
fn matches_search(needle: &str, item: &SupplyItem) -> bool {
    needle.is_empty()
        || item.name.to_lowercase().contains(needle)
        || item.supplier.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parses_all_in_any_case() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(Selection::All));
        assert_eq!(" ALL ".parse::<StatusFilter>(), Ok(Selection::All));
        assert_eq!(
            "Wound Care".parse::<CategoryFilter>(),
            Ok(Selection::Only(Category::WoundCare))
        );
        assert_eq!(
            "low stock".parse::<StatusFilter>(),
            Ok(Selection::Only(StockStatus::LowStock))
        );
        assert!("everything".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn selection_displays_label() {
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(Selection::Only(Category::Ppe).to_string(), "PPE");
    }
}
