//! Filter engine behaviour.

mod common;

use proptest::prelude::*;
use rust_decimal::Decimal;

use common::{id, sample_store, supply_input};
use medsupply_core::{InventoryStats, Selection, SupplyFilter, SupplyStore};
use medsupply_model::{Category, StockStatus, SupplyId, SupplyItem};

fn names(rows: &[&SupplyItem]) -> Vec<String> {
    rows.iter().map(|item| item.name.clone()).collect()
}

#[test]
fn inactive_filter_is_identity() {
    let store = sample_store();
    let filter = SupplyFilter::new();
    assert!(filter.is_inactive());
    let rows = filter.apply(store.list());
    assert_eq!(rows.len(), store.len());
    assert!(rows.iter().zip(store.list()).all(|(a, b)| *a == b));
}

#[test]
fn search_is_case_insensitive() {
    let store = sample_store();
    let rows = SupplyFilter::new().with_search("mask").apply(store.list());
    assert_eq!(names(&rows), vec!["Surgical Masks"]);

    let rows = SupplyFilter::new().with_search("SYRINGE").apply(store.list());
    assert_eq!(names(&rows), vec!["Insulin Syringes"]);
}

#[test]
fn search_matches_supplier() {
    let store = sample_store();
    let rows = SupplyFilter::new().with_search("medcorp").apply(store.list());
    assert_eq!(names(&rows), vec!["Surgical Masks", "Bandages"]);
}

#[test]
fn category_filter_is_exact() {
    let store = sample_store();
    let rows = SupplyFilter::new()
        .with_category(Selection::Only(Category::Ppe))
        .apply(store.list());
    assert_eq!(names(&rows), vec!["Surgical Masks", "Disposable Gloves"]);

    let rows = SupplyFilter::new()
        .with_category(Selection::Only(Category::Medication))
        .apply(store.list());
    assert!(rows.is_empty());
}

#[test]
fn status_filter_uses_derived_status() {
    let mut store = sample_store();
    let low = SupplyFilter::new().with_status(Selection::Only(StockStatus::LowStock));
    assert_eq!(
        names(&low.apply(store.list())),
        vec!["Disposable Gloves", "Bandages"]
    );

    let mut thermometers = store.get(id(5)).unwrap().to_input();
    thermometers.quantity = 20;
    store.update(id(5), thermometers).unwrap();
    assert_eq!(
        names(&low.apply(store.list())),
        vec!["Disposable Gloves", "Bandages", "Thermometers"]
    );
}

#[test]
fn all_conditions_must_hold() {
    let store = sample_store();
    let filter = SupplyFilter::new()
        .with_search("gloves")
        .with_category(Selection::Only(Category::Ppe))
        .with_status(Selection::Only(StockStatus::InStock));
    assert!(filter.apply(store.list()).is_empty());
    assert!(!filter.matches(store.get(id(2)).unwrap()));
}

#[test]
fn stats_ignore_active_filter() {
    let store = sample_store();
    let filter = SupplyFilter::new().with_search("mask");
    let visible: Vec<SupplyItem> = filter.apply(store.list()).into_iter().cloned().collect();
    let full = InventoryStats::from_items(store.list());
    let filtered = InventoryStats::from_items(&visible);
    assert_eq!(full.total_supplies, 5);
    assert_eq!(filtered.total_supplies, 1);
    assert_ne!(full.total_value, filtered.total_value);
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

type Row = (String, Category, String, u32, u32, i64);

/// Rows spanning the whole accepted range: any `u32` count and prices up to
/// the 1000000.00 cap.
fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,6}( [A-Za-z]{1,5})?",
            arb_category(),
            "[A-Za-z]{1,8}",
            any::<u32>(),
            any::<u32>(),
            0i64..=100_000_000,
        ),
        0..20,
    )
}

fn store_from_rows(rows: &[Row]) -> SupplyStore {
    let mut store = SupplyStore::new();
    for (name, category, supplier, quantity, min_stock, cents) in rows {
        store
            .add(supply_input(name, *category, supplier, *quantity, *min_stock, *cents))
            .unwrap();
    }
    store
}

fn arb_store() -> impl Strategy<Value = SupplyStore> {
    arb_rows().prop_map(|rows| store_from_rows(&rows))
}

proptest! {
    #[test]
    fn empty_filters_return_everything(store in arb_store()) {
        let rows = SupplyFilter::new().apply(store.list());
        let ids: Vec<SupplyId> = rows.iter().map(|item| item.id).collect();
        let expected: Vec<SupplyId> = store.list().iter().map(|item| item.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn filtered_rows_are_an_ordered_subset(store in arb_store(), search in "[a-z]{0,3}", category in arb_category()) {
        let filter = SupplyFilter::new()
            .with_search(search)
            .with_category(Selection::Only(category));
        let rows = filter.apply(store.list());
        let mut last = None;
        for row in rows {
            prop_assert!(filter.matches(row));
            prop_assert_eq!(row.category, category);
            prop_assert!(last < Some(row.id));
            last = Some(row.id);
        }
    }

    #[test]
    fn status_matches_levels(store in arb_store()) {
        for item in store.list() {
            prop_assert_eq!(item.status().is_low(), item.quantity <= item.min_stock);
        }
        let stats = InventoryStats::from_items(store.list());
        let low = store.list().iter().filter(|item| item.quantity <= item.min_stock).count();
        prop_assert_eq!(stats.low_stock_items, low);
    }

    #[test]
    fn total_value_is_exact_across_the_accepted_range(rows in arb_rows()) {
        let store = store_from_rows(&rows);
        let cents: i128 = rows
            .iter()
            .map(|(_, _, _, quantity, _, cents)| i128::from(*quantity) * i128::from(*cents))
            .sum();
        let stats = InventoryStats::from_items(store.list());
        prop_assert_eq!(stats.total_value, Decimal::from_i128_with_scale(cents, 2));
    }

    #[test]
    fn apply_agrees_with_matches(store in arb_store(), search in "[A-Za-z]{0,3}", status in prop::bool::ANY) {
        let status = if status { StockStatus::LowStock } else { StockStatus::InStock };
        let filter = SupplyFilter::new()
            .with_search(search)
            .with_status(Selection::Only(status));
        let visible: Vec<SupplyId> = filter.apply(store.list()).iter().map(|item| item.id).collect();
        let matching: Vec<SupplyId> = store
            .list()
            .iter()
            .filter(|item| filter.matches(item))
            .map(|item| item.id)
            .collect();
        prop_assert_eq!(visible, matching);
    }
}
