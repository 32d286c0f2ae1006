//! Supply item records and their typed input payload.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Category, Result, StockStatus, SupplyError, SupplyId};

/// Number of fractional digits allowed in a unit price.
pub const PRICE_SCALE: u32 = 2;

/// Largest accepted unit price, `1000000.00`.
///
/// Keeps `quantity * unit_price` summed over every possible id well inside
/// the `Decimal` range.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, PRICE_SCALE);

/// User-editable fields of a supply item, used to flag validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplyField {
    Name,
    Category,
    Supplier,
    Quantity,
    MinStock,
    UnitPrice,
    ExpiryDate,
}

impl SupplyField {
    pub const ALL: [SupplyField; 7] = [
        SupplyField::Name,
        SupplyField::Category,
        SupplyField::Supplier,
        SupplyField::Quantity,
        SupplyField::MinStock,
        SupplyField::UnitPrice,
        SupplyField::ExpiryDate,
    ];

    /// Form label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            SupplyField::Name => "Name",
            SupplyField::Category => "Category",
            SupplyField::Supplier => "Supplier",
            SupplyField::Quantity => "Quantity",
            SupplyField::MinStock => "Min Stock",
            SupplyField::UnitPrice => "Unit Price",
            SupplyField::ExpiryDate => "Expiry Date",
        }
    }
}

impl fmt::Display for SupplyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validated field values for creating or replacing a supply item.
///
/// Carries everything except the id (assigned by the store) and the stock
/// status (always derived).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyItemInput {
    pub name: String,
    pub category: Category,
    pub supplier: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub unit_price: Decimal,
    pub expiry_date: NaiveDate,
}

impl SupplyItemInput {
    pub fn status(&self) -> StockStatus {
        StockStatus::from_levels(self.quantity, self.min_stock)
    }

    /// Check the record invariants that typed fields alone cannot express.
    ///
    /// # Errors
    ///
    /// `ValidationRequired` for a blank name or supplier, `InvalidText` for
    /// one with surrounding whitespace, and `InvalidNumber` for a unit price
    /// that is negative, finer than cents, or above [`MAX_UNIT_PRICE`].
    pub fn check(&self) -> Result<()> {
        check_fields(&self.name, &self.supplier, self.unit_price)
    }
}

fn check_fields(name: &str, supplier: &str, unit_price: Decimal) -> Result<()> {
    check_text(SupplyField::Name, name)?;
    check_text(SupplyField::Supplier, supplier)?;
    if !is_valid_price(unit_price) {
        return Err(SupplyError::InvalidNumber {
            field: SupplyField::UnitPrice,
            value: unit_price.to_string(),
        });
    }
    Ok(())
}

fn check_text(field: SupplyField, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SupplyError::ValidationRequired { field });
    }
    if trimmed.len() != value.len() {
        return Err(SupplyError::InvalidText {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Non-negative, at most [`PRICE_SCALE`] decimals, at most [`MAX_UNIT_PRICE`].
pub fn is_valid_price(price: Decimal) -> bool {
    (!price.is_sign_negative() || price.is_zero())
        && price.normalize().scale() <= PRICE_SCALE
        && price <= MAX_UNIT_PRICE
}

/// A stocked medical product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyItem {
    pub id: SupplyId,
    pub name: String,
    pub category: Category,
    pub supplier: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub unit_price: Decimal,
    pub expiry_date: NaiveDate,
}

impl SupplyItem {
    pub fn new(id: SupplyId, input: SupplyItemInput) -> Self {
        let SupplyItemInput {
            name,
            category,
            supplier,
            quantity,
            min_stock,
            unit_price,
            expiry_date,
        } = input;
        Self {
            id,
            name,
            category,
            supplier,
            quantity,
            min_stock,
            unit_price,
            expiry_date,
        }
    }

    /// Stock status derived from the current quantity and minimum.
    pub fn status(&self) -> StockStatus {
        StockStatus::from_levels(self.quantity, self.min_stock)
    }

    /// On-hand value of this item at full precision.
    ///
    /// Saturates at `Decimal::MAX`; unreachable for checked records.
    pub fn value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }

    /// See [`SupplyItemInput::check`].
    ///
    /// # Errors
    ///
    /// Same as [`SupplyItemInput::check`].
    pub fn check(&self) -> Result<()> {
        check_fields(&self.name, &self.supplier, self.unit_price)
    }

    /// Replace every field except the id.
    pub fn apply(&mut self, input: SupplyItemInput) {
        let id = self.id;
        *self = SupplyItem::new(id, input);
    }

    /// The editable fields of this item as an input payload.
    pub fn to_input(&self) -> SupplyItemInput {
        SupplyItemInput {
            name: self.name.clone(),
            category: self.category,
            supplier: self.supplier.clone(),
            quantity: self.quantity,
            min_stock: self.min_stock,
            unit_price: self.unit_price,
            expiry_date: self.expiry_date,
        }
    }
}
