//! Rendering tests for the terminal dashboard.

use insta::assert_snapshot;

use medsupply_cli::render::{
    categories_table, filter_caption, form_errors_table, stats_lines, stats_table, supplies_table,
};
use medsupply_core::{InventoryStats, Selection, SupplyFilter, SupplyStore};
use medsupply_model::{Category, StockStatus, sample_inputs};
use medsupply_validate::SupplyForm;

fn sample_store() -> SupplyStore {
    let mut store = SupplyStore::new();
    for input in sample_inputs() {
        store.add(input).unwrap();
    }
    store
}

#[test]
fn stats_lines_for_sample_inventory() {
    let stats = InventoryStats::from_items(sample_store().list());
    assert_snapshot!(stats_lines(&stats), @r"
    Total Supplies: 5
    Low Stock Items: 2
    Total Value: $1673.75
    Suppliers: 4
    ");
}

#[test]
fn stats_lines_for_empty_inventory() {
    let stats = InventoryStats::from_items(&[]);
    assert_snapshot!(stats_lines(&stats), @r"
    Total Supplies: 0
    Low Stock Items: 0
    Total Value: $0.00
    Suppliers: 0
    ");
}

#[test]
fn stats_table_shows_all_four_figures() {
    let stats = InventoryStats::from_items(sample_store().list());
    let rendered = stats_table(&stats).to_string();
    assert!(rendered.contains("Total Supplies"));
    assert!(rendered.contains("$1673.75"));
    assert!(rendered.contains("Suppliers"));
}

#[test]
fn supplies_table_lists_rows_with_status() {
    let store = sample_store();
    let rows: Vec<_> = store.list().iter().collect();
    let rendered = supplies_table(&rows).to_string();
    assert!(rendered.contains("Thermometers"));
    assert!(rendered.contains("$15.00"));
    assert!(rendered.contains("2025-08-15"));
    assert!(rendered.contains("Low Stock"));
    assert!(rendered.contains("In Stock"));
}

#[test]
fn no_caption_without_filters() {
    assert_eq!(filter_caption(&SupplyFilter::new(), 5, 5), None);
}

#[test]
fn caption_names_each_active_filter() {
    let filter = SupplyFilter::new()
        .with_search("med")
        .with_category(Selection::Only(Category::Ppe))
        .with_status(Selection::Only(StockStatus::LowStock));
    assert_eq!(
        filter_caption(&filter, 1, 5).as_deref(),
        Some("Showing 1 of 5 supplies (search \"med\", category PPE, status Low Stock)")
    );
}

#[test]
fn caption_skips_filters_left_at_all() {
    let filter = SupplyFilter::new().with_status(Selection::Only(StockStatus::InStock));
    assert_eq!(
        filter_caption(&filter, 3, 5).as_deref(),
        Some("Showing 3 of 5 supplies (status In Stock)")
    );
}

#[test]
fn form_errors_table_labels_fields() {
    let errors = SupplyForm::new().validate().unwrap_err();
    let rendered = form_errors_table(&errors).to_string();
    assert!(rendered.contains("Name"));
    assert!(rendered.contains("Supplier"));
    assert!(rendered.contains("Problem"));
}

#[test]
fn categories_table_lists_every_category() {
    let rendered = categories_table().to_string();
    for category in Category::ALL {
        assert!(rendered.contains(category.as_str()));
    }
}
