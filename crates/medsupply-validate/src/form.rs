//! Raw form capture for supply items.
//!
//! A [`SupplyForm`] holds exactly what the user typed. [`SupplyForm::validate`]
//! converts it into a [`SupplyItemInput`] or reports every field that needs
//! attention; nothing partially parsed ever leaves this module.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medsupply_model::{Category, SupplyError, SupplyField, SupplyItem, SupplyItemInput};

use crate::numeric::{format_price, parse_count, parse_date, parse_price};

/// Text values of the supply form, one per editable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyForm {
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub quantity: String,
    pub min_stock: String,
    pub unit_price: String,
    pub expiry_date: String,
}

impl SupplyForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with an existing record's values.
    pub fn from_item(item: &SupplyItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.as_str().to_string(),
            supplier: item.supplier.clone(),
            quantity: item.quantity.to_string(),
            min_stock: item.min_stock.to_string(),
            unit_price: format_price(item.unit_price),
            expiry_date: item.expiry_date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn get(&self, field: SupplyField) -> &str {
        match field {
            SupplyField::Name => &self.name,
            SupplyField::Category => &self.category,
            SupplyField::Supplier => &self.supplier,
            SupplyField::Quantity => &self.quantity,
            SupplyField::MinStock => &self.min_stock,
            SupplyField::UnitPrice => &self.unit_price,
            SupplyField::ExpiryDate => &self.expiry_date,
        }
    }

    /// Set a single field, as a text input change would.
    pub fn set(&mut self, field: SupplyField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SupplyField::Name => self.name = value,
            SupplyField::Category => self.category = value,
            SupplyField::Supplier => self.supplier = value,
            SupplyField::Quantity => self.quantity = value,
            SupplyField::MinStock => self.min_stock = value,
            SupplyField::UnitPrice => self.unit_price = value,
            SupplyField::ExpiryDate => self.expiry_date = value,
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert the captured text into a typed input.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order, when any field is blank or
    /// malformed.
    pub fn validate(&self) -> Result<SupplyItemInput, FormErrors> {
        let mut errors = Vec::new();

        let name = required_text(SupplyField::Name, &self.name, &mut errors);
        let category = parse_category(&self.category, &mut errors);
        let supplier = required_text(SupplyField::Supplier, &self.supplier, &mut errors);
        let quantity = numeric(SupplyField::Quantity, &self.quantity, parse_count, &mut errors);
        let min_stock = numeric(SupplyField::MinStock, &self.min_stock, parse_count, &mut errors);
        let unit_price = numeric(SupplyField::UnitPrice, &self.unit_price, parse_price, &mut errors);
        let expiry_date = parse_expiry(&self.expiry_date, &mut errors);

        match (
            name,
            category,
            supplier,
            quantity,
            min_stock,
            unit_price,
            expiry_date,
        ) {
            (
                Some(name),
                Some(category),
                Some(supplier),
                Some(quantity),
                Some(min_stock),
                Some(unit_price),
                Some(expiry_date),
            ) if errors.is_empty() => Ok(SupplyItemInput {
                name,
                category,
                supplier,
                quantity,
                min_stock,
                unit_price,
                expiry_date,
            }),
            _ => {
                debug!(failed_fields = errors.len(), "supply form rejected");
                Err(FormErrors(errors))
            }
        }
    }
}

fn required_text(field: SupplyField, value: &str, errors: &mut Vec<SupplyError>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(SupplyError::ValidationRequired { field });
        return None;
    }
    Some(trimmed.to_string())
}

fn parse_category(value: &str, errors: &mut Vec<SupplyError>) -> Option<Category> {
    let field = SupplyField::Category;
    if value.trim().is_empty() {
        errors.push(SupplyError::ValidationRequired { field });
        return None;
    }
    match value.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            errors.push(SupplyError::InvalidChoice {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

fn numeric<T>(
    field: SupplyField,
    value: &str,
    parse: fn(&str) -> Option<T>,
    errors: &mut Vec<SupplyError>,
) -> Option<T> {
    if value.trim().is_empty() {
        errors.push(SupplyError::ValidationRequired { field });
        return None;
    }
    let parsed = parse(value);
    if parsed.is_none() {
        errors.push(SupplyError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    parsed
}

fn parse_expiry(value: &str, errors: &mut Vec<SupplyError>) -> Option<chrono::NaiveDate> {
    let field = SupplyField::ExpiryDate;
    if value.trim().is_empty() {
        errors.push(SupplyError::ValidationRequired { field });
        return None;
    }
    let parsed = parse_date(value);
    if parsed.is_none() {
        errors.push(SupplyError::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    parsed
}

/// Field-level failures of a rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors(Vec<SupplyError>);

impl FormErrors {
    pub fn errors(&self) -> &[SupplyError] {
        &self.0
    }

    /// Fields to flag in the form.
    pub fn fields(&self) -> Vec<SupplyField> {
        self.0.iter().filter_map(SupplyError::field).collect()
    }

    pub fn has_field(&self, field: SupplyField) -> bool {
        self.0.iter().any(|error| error.field() == Some(field))
    }

    /// The error flagged on `field`, if any.
    pub fn for_field(&self, field: SupplyField) -> Option<&SupplyError> {
        self.0.iter().find(|error| error.field() == Some(field))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl IntoIterator for FormErrors {
    type Item = SupplyError;
    type IntoIter = std::vec::IntoIter<SupplyError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
