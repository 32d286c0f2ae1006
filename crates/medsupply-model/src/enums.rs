//! Type-safe enumerations for supply metadata.
//!
//! Categories and stock states are shown to users as labels ("Wound Care",
//! "Low Stock"); these enums keep the label set closed and give a single
//! place for parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category of a supply item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Personal protective equipment: masks, gloves, gowns.
    #[serde(rename = "PPE")]
    Ppe,
    /// Syringes, needles and other injection supplies.
    Injection,
    /// Bandages, dressings, gauze.
    #[serde(rename = "Wound Care")]
    WoundCare,
    /// Thermometers, test strips, diagnostic kits.
    Diagnostic,
    Medication,
    Equipment,
}

impl Category {
    /// Every category, in the order they are offered to users.
    pub const ALL: [Category; 6] = [
        Category::Ppe,
        Category::Injection,
        Category::WoundCare,
        Category::Diagnostic,
        Category::Medication,
        Category::Equipment,
    ];

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ppe => "PPE",
            Category::Injection => "Injection",
            Category::WoundCare => "Wound Care",
            Category::Diagnostic => "Diagnostic",
            Category::Medication => "Medication",
            Category::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category label (case-insensitive, surrounding whitespace ignored).
    ///
    /// `wound-care` and `wound_care` are accepted alongside `Wound Care` so the
    /// label can be typed on a command line without quoting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");

        match normalized.as_str() {
            "PPE" => Ok(Category::Ppe),
            "INJECTION" => Ok(Category::Injection),
            "WOUND CARE" => Ok(Category::WoundCare),
            "DIAGNOSTIC" => Ok(Category::Diagnostic),
            "MEDICATION" => Ok(Category::Medication),
            "EQUIPMENT" => Ok(Category::Equipment),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Stock state of a supply item.
///
/// Never stored: always derived from quantity and minimum stock via
/// [`StockStatus::from_levels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
}

impl StockStatus {
    /// Low stock when on-hand quantity is at or below the minimum.
    pub fn from_levels(quantity: u32, min_stock: u32) -> Self {
        if quantity <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::LowStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");

        match normalized.as_str() {
            "IN STOCK" => Ok(StockStatus::InStock),
            "LOW STOCK" => Ok(StockStatus::LowStock),
            _ => Err(format!("Unknown stock status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_parse_is_lenient_on_case_and_separators() {
        assert_eq!("ppe".parse::<Category>(), Ok(Category::Ppe));
        assert_eq!("wound-care".parse::<Category>(), Ok(Category::WoundCare));
        assert_eq!(" Wound_Care ".parse::<Category>(), Ok(Category::WoundCare));
        assert!("Surgery".parse::<Category>().is_err());
    }

    #[test]
    fn status_boundary_is_inclusive() {
        assert_eq!(StockStatus::from_levels(50, 50), StockStatus::LowStock);
        assert_eq!(StockStatus::from_levels(51, 50), StockStatus::InStock);
        assert_eq!(StockStatus::from_levels(0, 0), StockStatus::LowStock);
    }
}
