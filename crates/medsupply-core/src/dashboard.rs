//! Presentation-facing state: the store, the active filters, and both
//! dialogs.

use serde::Serialize;
use tracing::info;

use medsupply_model::{Result, SupplyError, SupplyId, SupplyItem};

use crate::dialog::{AddSupplyDialog, EditSupplyDialog, SubmitError};
use crate::filter::{CategoryFilter, StatusFilter, SupplyFilter};
use crate::stats::InventoryStats;
use crate::store::SupplyStore;

/// What a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub stats: InventoryStats,
    pub rows: Vec<&'a SupplyItem>,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: SupplyStore,
    filter: SupplyFilter,
    add_dialog: AddSupplyDialog,
    edit_dialog: EditSupplyDialog,
}

impl Dashboard {
    pub fn new(store: SupplyStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &SupplyStore {
        &self.store
    }

    pub fn into_store(self) -> SupplyStore {
        self.store
    }

    pub fn filter(&self) -> &SupplyFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: SupplyFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    /// Figures over the whole collection; filters do not apply.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_items(self.store.list())
    }

    /// Rows passing the active filters.
    pub fn visible(&self) -> Vec<&SupplyItem> {
        self.filter.apply(self.store.list())
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView {
            stats: self.stats(),
            rows: self.visible(),
        }
    }

    pub fn add_dialog(&self) -> &AddSupplyDialog {
        &self.add_dialog
    }

    pub fn add_dialog_mut(&mut self) -> &mut AddSupplyDialog {
        &mut self.add_dialog
    }

    pub fn open_add(&mut self) {
        self.add_dialog.open();
    }

    /// # Errors
    ///
    /// See [`AddSupplyDialog::submit`].
    pub fn submit_add(&mut self) -> std::result::Result<SupplyItem, SubmitError> {
        let item = self.add_dialog.submit(&mut self.store)?;
        info!(id = %item.id, name = %item.name, "supply added");
        Ok(item)
    }

    pub fn edit_dialog(&self) -> &EditSupplyDialog {
        &self.edit_dialog
    }

    pub fn edit_dialog_mut(&mut self) -> &mut EditSupplyDialog {
        &mut self.edit_dialog
    }

    /// Open the edit dialog seeded from the item with `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no item has `id`.
    pub fn open_edit(&mut self, id: SupplyId) -> Result<()> {
        let item = self.store.get(id).ok_or(SupplyError::NotFound { id })?;
        self.edit_dialog.open(item);
        Ok(())
    }

    /// # Errors
    ///
    /// See [`EditSupplyDialog::submit`].
    pub fn submit_edit(&mut self) -> std::result::Result<SupplyItem, SubmitError> {
        let item = self.edit_dialog.submit(&mut self.store)?;
        info!(id = %item.id, status = %item.status(), "supply updated");
        Ok(item)
    }

    /// # Errors
    ///
    /// `NotFound` when no item has `id`; nothing changes.
    pub fn delete(&mut self, id: SupplyId) -> Result<SupplyItem> {
        let removed = self.store.remove(id)?;
        info!(id = %removed.id, name = %removed.name, "supply deleted");
        Ok(removed)
    }
}
