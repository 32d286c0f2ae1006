use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use medsupply_core::{Dashboard, SubmitError, SupplyFilter, SupplyStore};
use medsupply_model::{SupplyField, SupplyId, SupplyItem, sample_inputs};
use medsupply_persistence::{
    JsonFileRepository, PersistenceError, SupplyRepository, load_store, save_store,
};
use medsupply_validate::SupplyForm;

use medsupply_cli::render::{
    categories_table, filter_caption, form_errors_table, stats_lines, stats_table, supplies_table,
};

use crate::cli::{AddArgs, EditArgs, ListArgs};

pub fn run_list(data: &Path, args: &ListArgs) -> Result<()> {
    let mut dashboard = open_dashboard(&JsonFileRepository::new(data))?;
    dashboard.set_filter(
        SupplyFilter::new()
            .with_search(args.search.clone())
            .with_category(args.category)
            .with_status(args.status),
    );
    let view = dashboard.view();
    println!("{}", stats_table(&view.stats));
    if let Some(caption) = filter_caption(
        dashboard.filter(),
        view.rows.len(),
        view.stats.total_supplies,
    ) {
        println!("{caption}");
    }
    if view.rows.is_empty() {
        println!("No supplies match.");
    } else {
        println!("{}", supplies_table(&view.rows));
    }
    Ok(())
}

pub fn run_stats(data: &Path) -> Result<()> {
    let dashboard = open_dashboard(&JsonFileRepository::new(data))?;
    println!("{}", stats_lines(&dashboard.stats()));
    Ok(())
}

pub fn run_add(data: &Path, args: &AddArgs) -> Result<()> {
    let repo = JsonFileRepository::new(data);
    let mut dashboard = open_dashboard(&repo)?;
    dashboard.open_add();
    dashboard.add_dialog_mut().fill(SupplyForm {
        name: args.name.clone(),
        category: args.category.clone(),
        supplier: args.supplier.clone(),
        quantity: args.quantity.clone(),
        min_stock: args.min_stock.clone(),
        unit_price: args.unit_price.clone(),
        expiry_date: args.expiry_date.clone(),
    });
    let item = report_submit(dashboard.submit_add())?;
    persist(&repo, &dashboard)?;
    print_committed("Added", &item);
    Ok(())
}

pub fn run_edit(data: &Path, args: &EditArgs) -> Result<()> {
    let repo = JsonFileRepository::new(data);
    let mut dashboard = open_dashboard(&repo)?;
    let span = info_span!("edit", id = %args.id);
    let _guard = span.enter();

    dashboard
        .open_edit(args.id)
        .with_context(|| format!("cannot edit supply {}", args.id))?;
    let overrides = [
        (SupplyField::Name, &args.name),
        (SupplyField::Category, &args.category),
        (SupplyField::Supplier, &args.supplier),
        (SupplyField::Quantity, &args.quantity),
        (SupplyField::MinStock, &args.min_stock),
        (SupplyField::UnitPrice, &args.unit_price),
        (SupplyField::ExpiryDate, &args.expiry_date),
    ];
    let mut changed = 0usize;
    for (field, value) in overrides {
        if let Some(value) = value {
            dashboard.edit_dialog_mut().set_field(field, value.clone());
            changed += 1;
        }
    }
    if changed == 0 {
        bail!("nothing to change for supply {}; pass at least one field option", args.id);
    }

    let item = report_submit(dashboard.submit_edit())?;
    persist(&repo, &dashboard)?;
    print_committed("Updated", &item);
    Ok(())
}

pub fn run_delete(data: &Path, id: SupplyId) -> Result<()> {
    let repo = JsonFileRepository::new(data);
    let mut dashboard = open_dashboard(&repo)?;
    let removed = dashboard.delete(id)?;
    persist(&repo, &dashboard)?;
    println!("Deleted supply {} ({})", removed.id, removed.name);
    Ok(())
}

pub fn run_seed(data: &Path, force: bool) -> Result<()> {
    let repo = JsonFileRepository::new(data);
    let existing = open_dashboard(&repo)?;
    if !existing.store().is_empty() && !force {
        bail!(
            "{} already holds {} supplies; pass --force to replace them",
            data.display(),
            existing.store().len()
        );
    }

    let mut store = SupplyStore::new();
    for input in sample_inputs() {
        store.add(input)?;
    }
    save_store(&repo, &store)
        .map_err(persistence_error)
        .context("failed to write sample inventory")?;
    info!(items = store.len(), "sample inventory written");
    println!(
        "Seeded {} with {} sample supplies",
        data.display(),
        store.len()
    );
    Ok(())
}

pub fn run_categories() -> Result<()> {
    println!("{}", categories_table());
    Ok(())
}

fn open_dashboard<R: SupplyRepository>(repo: &R) -> Result<Dashboard> {
    let store = load_store(repo)
        .map_err(persistence_error)
        .context("failed to load inventory")?;
    Ok(Dashboard::new(store))
}

fn persist<R: SupplyRepository>(repo: &R, dashboard: &Dashboard) -> Result<()> {
    save_store(repo, dashboard.store())
        .map_err(persistence_error)
        .context("failed to save inventory")
}

fn persistence_error(error: PersistenceError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!("{}\nhint: {hint}", error.user_message()),
        None => anyhow!("{}", error.user_message()),
    }
}

/// Print field problems for a rejected form; other failures pass through.
fn report_submit(result: std::result::Result<SupplyItem, SubmitError>) -> Result<SupplyItem> {
    match result {
        Ok(item) => Ok(item),
        Err(SubmitError::Invalid(errors)) => {
            eprintln!("{}", form_errors_table(&errors));
            Err(anyhow!(
                "supply form rejected: {} field(s) need attention",
                errors.len()
            ))
        }
        Err(other) => Err(other.into()),
    }
}

fn print_committed(action: &str, item: &SupplyItem) {
    println!(
        "{action} supply {} ({}) - {}",
        item.id,
        item.name,
        item.status()
    );
}
