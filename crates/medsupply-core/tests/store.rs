//! Store and derived statistics behaviour.

mod common;

use rust_decimal::Decimal;

use common::{gloves, id, masks, sample_store, supply_input, two_item_store};
use medsupply_core::{InventoryStats, SupplyStore};
use medsupply_model::{Category, StockStatus, SupplyError};

#[test]
fn low_stock_count_follows_edits() {
    let mut store = two_item_store();
    let stats = InventoryStats::from_items(store.list());
    assert_eq!(stats.low_stock_items, 1);
    assert_eq!(store.get(id(2)).unwrap().status(), StockStatus::LowStock);

    let mut fields = masks();
    fields.quantity = 50;
    let updated = store.update(id(1), fields).unwrap();
    assert_eq!(updated.status(), StockStatus::LowStock);

    let stats = InventoryStats::from_items(store.list());
    assert_eq!(stats.low_stock_items, 2);
    assert_eq!(store.get(id(1)).unwrap().status(), StockStatus::LowStock);
}

#[test]
fn add_to_two_item_store_assigns_id_three() {
    let mut store = two_item_store();
    let added = store
        .add(supply_input(
            "Gauze Pads",
            Category::WoundCare,
            "MedCorp Inc",
            10,
            20,
            40,
        ))
        .unwrap();
    assert_eq!(added.id, id(3));
    assert_eq!(added.status(), StockStatus::LowStock);
    assert_eq!(InventoryStats::from_items(store.list()).total_supplies, 3);
}

#[test]
fn add_id_exceeds_every_existing_id() {
    let mut store = sample_store();
    for _ in 0..3 {
        let max = store.list().iter().map(|item| item.id).max().unwrap();
        let added = store.add(gloves()).unwrap();
        assert!(added.id > max);
    }
}

#[test]
fn list_preserves_insertion_order() {
    let store = sample_store();
    let names: Vec<&str> = store.list().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Surgical Masks",
            "Disposable Gloves",
            "Insulin Syringes",
            "Bandages",
            "Thermometers"
        ]
    );
}

#[test]
fn update_missing_id_is_not_found() {
    let mut store = two_item_store();
    let before = store.list().to_vec();
    assert_eq!(
        store.update(id(9), masks()).unwrap_err(),
        SupplyError::NotFound { id: id(9) }
    );
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn update_replaces_fields_but_keeps_id_and_position() {
    let mut store = two_item_store();
    let replacement = supply_input("Nitrile Gloves", Category::Ppe, "GloveWorks", 500, 50, 30);
    let updated = store.update(id(2), replacement).unwrap();
    assert_eq!(updated.id, id(2));
    assert_eq!(store.list()[1].name, "Nitrile Gloves");
    assert_eq!(store.list()[1].supplier, "GloveWorks");
    assert_eq!(store.list()[1].status(), StockStatus::InStock);
}

#[test]
fn remove_drops_item() {
    let mut store = two_item_store();
    let removed = store.remove(id(1)).unwrap();
    assert_eq!(removed.name, "Surgical Masks");
    assert!(store.list().iter().all(|item| item.id != id(1)));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_absent_id_leaves_collection_unchanged() {
    let mut store = two_item_store();
    assert_eq!(
        store.remove(id(42)).unwrap_err(),
        SupplyError::NotFound { id: id(42) }
    );
    assert_eq!(store.len(), 2);
}

#[test]
fn sample_stats_match_dashboard_figures() {
    let stats = InventoryStats::from_items(sample_store().list());
    assert_eq!(stats.total_supplies, 5);
    assert_eq!(stats.low_stock_items, 2);
    // 150*0.75 + 45*0.25 + 200*1.5 + 25*2 + 80*15
    assert_eq!(stats.total_value, Decimal::new(167375, 2));
    assert_eq!(stats.total_value_display(), "$1673.75");
    assert_eq!(stats.unique_suppliers, 4);
}

#[test]
fn supplier_count_is_case_sensitive() {
    let mut store = SupplyStore::new();
    store
        .add(supply_input("A", Category::Ppe, "MedCorp Inc", 1, 0, 100))
        .unwrap();
    store
        .add(supply_input("B", Category::Ppe, "medcorp inc", 1, 0, 100))
        .unwrap();
    store
        .add(supply_input("C", Category::Ppe, "MedCorp Inc", 1, 0, 100))
        .unwrap();
    assert_eq!(InventoryStats::from_items(store.list()).unique_suppliers, 2);
}

#[test]
fn total_value_keeps_precision_until_display() {
    let mut store = SupplyStore::new();
    let mut input = supply_input("Swabs", Category::WoundCare, "MedCorp Inc", 3, 0, 0);
    input.unit_price = Decimal::new(3335, 3);
    store.add(input).unwrap();
    let stats = InventoryStats::from_items(store.list());
    assert_eq!(stats.total_value, Decimal::new(10005, 3));
    assert_eq!(stats.total_value_rounded(), Decimal::new(1000, 2));
}
