use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use medsupply_model::SupplyItem;

/// Dashboard figures over the full, unfiltered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_supplies: usize,
    pub low_stock_items: usize,
    /// Sum of quantity times unit price, unrounded. Saturates at
    /// `Decimal::MAX` rather than overflowing.
    pub total_value: Decimal,
    /// Distinct supplier names, compared exactly.
    pub unique_suppliers: usize,
}

impl InventoryStats {
    pub fn from_items(items: &[SupplyItem]) -> Self {
        let suppliers: BTreeSet<&str> = items.iter().map(|item| item.supplier.as_str()).collect();
        Self {
            total_supplies: items.len(),
            low_stock_items: items.iter().filter(|item| item.status().is_low()).count(),
            total_value: items
                .iter()
                .map(SupplyItem::value)
                .fold(Decimal::ZERO, Decimal::saturating_add),
            unique_suppliers: suppliers.len(),
        }
    }

    /// Total value rounded to cents for display.
    pub fn total_value_rounded(&self) -> Decimal {
        self.total_value.round_dp(2)
    }

    /// Total value as a currency string, e.g. `$1523.75`.
    pub fn total_value_display(&self) -> String {
        format_currency(self.total_value)
    }
}

/// Render an amount as dollars with exactly two decimals.
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
