//! Form capture for supply items: text in, validated [`SupplyItemInput`] out.
//!
//! [`SupplyItemInput`]: medsupply_model::SupplyItemInput

pub mod form;
pub mod numeric;

pub use form::{FormErrors, SupplyForm};
pub use numeric::{
    MAX_UNIT_PRICE, PRICE_SCALE, format_price, parse_count, parse_date, parse_price,
};
