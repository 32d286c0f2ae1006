//! Core inventory logic: the supply store, filtering, derived statistics,
//! and the add/edit form state that feeds the store.

pub mod dashboard;
pub mod dialog;
pub mod filter;
pub mod stats;
pub mod store;

pub use dashboard::{Dashboard, DashboardView};
pub use dialog::{AddSupplyDialog, EditSupplyDialog, SubmitError};
pub use filter::{CategoryFilter, Selection, StatusFilter, SupplyFilter};
pub use stats::{InventoryStats, format_currency};
pub use store::SupplyStore;
