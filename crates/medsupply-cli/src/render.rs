//! Terminal rendering of the dashboard.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medsupply_core::{InventoryStats, SupplyFilter, format_currency};
use medsupply_model::{Category, StockStatus, SupplyItem};
use medsupply_validate::FormErrors;

/// The four dashboard figures as plain `label: value` lines.
pub fn stats_lines(stats: &InventoryStats) -> String {
    [
        format!("Total Supplies: {}", stats.total_supplies),
        format!("Low Stock Items: {}", stats.low_stock_items),
        format!("Total Value: {}", stats.total_value_display()),
        format!("Suppliers: {}", stats.unique_suppliers),
    ]
    .join("\n")
}

/// Dashboard figures as a one-row card table.
pub fn stats_table(stats: &InventoryStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Supplies"),
        header_cell("Low Stock Items"),
        header_cell("Total Value"),
        header_cell("Suppliers"),
    ]);
    apply_summary_table_style(&mut table);
    let low_stock = if stats.low_stock_items > 0 {
        Cell::new(stats.low_stock_items)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(stats.low_stock_items)
    };
    table.add_row(vec![
        Cell::new(stats.total_supplies).add_attribute(Attribute::Bold),
        low_stock,
        Cell::new(stats.total_value_display()).add_attribute(Attribute::Bold),
        Cell::new(stats.unique_suppliers).add_attribute(Attribute::Bold),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table
}

/// The supply inventory table, one row per visible item.
pub fn supplies_table(rows: &[&SupplyItem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Supplier"),
        header_cell("Quantity"),
        header_cell("Min Stock"),
        header_cell("Unit Price"),
        header_cell("Expiry Date"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Center);
    for item in rows {
        table.add_row(vec![
            dim_cell(item.id),
            Cell::new(&item.name).add_attribute(Attribute::Bold),
            Cell::new(item.category),
            Cell::new(&item.supplier),
            Cell::new(item.quantity),
            Cell::new(item.min_stock),
            Cell::new(format_currency(item.unit_price)),
            Cell::new(item.expiry_date.format("%Y-%m-%d")),
            status_cell(item.status()),
        ]);
    }
    table
}

/// One-line description of the active filters, or `None` when inactive.
pub fn filter_caption(filter: &SupplyFilter, visible: usize, total: usize) -> Option<String> {
    if filter.is_inactive() {
        return None;
    }
    let mut parts = Vec::new();
    if !filter.search.is_empty() {
        parts.push(format!("search \"{}\"", filter.search));
    }
    if !filter.category.is_all() {
        parts.push(format!("category {}", filter.category));
    }
    if !filter.status.is_all() {
        parts.push(format!("status {}", filter.status));
    }
    Some(format!(
        "Showing {visible} of {total} supplies ({})",
        parts.join(", ")
    ))
}

/// Field-level validation failures of a rejected submission.
pub fn form_errors_table(errors: &FormErrors) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for error in errors.errors() {
        let field = error
            .field()
            .map_or_else(|| "-".to_string(), |field| field.label().to_string());
        table.add_row(vec![
            Cell::new(field).fg(Color::Yellow),
            Cell::new(error.to_string()),
        ]);
    }
    table
}

pub fn categories_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category")]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        table.add_row(vec![Cell::new(category)]);
    }
    table
}

fn status_cell(status: StockStatus) -> Cell {
    match status {
        StockStatus::LowStock => Cell::new(status)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        StockStatus::InStock => Cell::new(status).fg(Color::Green),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
