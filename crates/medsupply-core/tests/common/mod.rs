#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use medsupply_core::SupplyStore;
use medsupply_model::{Category, SupplyId, SupplyItemInput, sample_inputs};

pub fn supply_input(
    name: &str,
    category: Category,
    supplier: &str,
    quantity: u32,
    min_stock: u32,
    unit_price_cents: i64,
) -> SupplyItemInput {
    SupplyItemInput {
        name: name.to_string(),
        category,
        supplier: supplier.to_string(),
        quantity,
        min_stock,
        unit_price: Decimal::new(unit_price_cents, 2),
        expiry_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
    }
}

pub fn masks() -> SupplyItemInput {
    supply_input("Surgical Masks", Category::Ppe, "MedCorp Inc", 150, 100, 75)
}

pub fn gloves() -> SupplyItemInput {
    supply_input(
        "Disposable Gloves",
        Category::Ppe,
        "SafeGuard Medical",
        45,
        50,
        25,
    )
}

/// Store holding masks (id 1) and gloves (id 2).
pub fn two_item_store() -> SupplyStore {
    let mut store = SupplyStore::new();
    store.add(masks()).unwrap();
    store.add(gloves()).unwrap();
    store
}

/// Store holding the five built-in sample items.
pub fn sample_store() -> SupplyStore {
    let mut store = SupplyStore::new();
    for input in sample_inputs() {
        store.add(input).unwrap();
    }
    store
}

pub fn id(value: u32) -> SupplyId {
    SupplyId::new(value).unwrap()
}
