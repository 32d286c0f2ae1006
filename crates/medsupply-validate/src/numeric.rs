//! Numeric and date parsing for form text fields.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use medsupply_model::is_valid_price;
pub use medsupply_model::{MAX_UNIT_PRICE, PRICE_SCALE};

/// Parses a whole, non-negative count. Returns None for blank, negative,
/// fractional or otherwise malformed input.
pub fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

/// Parses a non-negative price with at most cents precision, capped at
/// [`MAX_UNIT_PRICE`].
pub fn parse_price(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let price = Decimal::from_str(trimmed).ok()?;
    is_valid_price(price).then(|| price.abs())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats a price for a text field: whole prices keep no decimals,
/// otherwise trailing zeros are dropped ("0.75", "2", "1.5").
pub fn format_price(price: Decimal) -> String {
    price.normalize().to_string()
}
