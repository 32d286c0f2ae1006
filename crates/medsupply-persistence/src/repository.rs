//! The load/save seam between the inventory and durable storage.

use std::cell::RefCell;

use tracing::debug;

use medsupply_core::SupplyStore;

use crate::error::{PersistenceError, Result};
use crate::snapshot::InventorySnapshot;

/// Durable storage for the whole inventory.
///
/// The core never calls this directly; the presentation layer loads once,
/// hands the store to a dashboard, and saves after each committed change.
pub trait SupplyRepository {
    /// Read the last saved inventory. A repository with nothing saved yet
    /// returns an empty snapshot.
    fn load(&self) -> Result<InventorySnapshot>;

    /// Replace the saved inventory.
    fn save(&self, snapshot: &InventorySnapshot) -> Result<()>;
}

/// Load and rebuild a store from `repository`.
///
/// # Errors
///
/// Propagates repository errors; `Inconsistent` when the saved records
/// cannot form a valid store.
pub fn load_store<R: SupplyRepository + ?Sized>(repository: &R) -> Result<SupplyStore> {
    let snapshot = repository.load()?;
    let store = snapshot
        .into_store()
        .map_err(|source| PersistenceError::Inconsistent { source })?;
    debug!(items = store.len(), next_id = ?store.next_id(), "inventory loaded");
    Ok(store)
}

/// Snapshot `store` and save it to `repository`.
///
/// # Errors
///
/// Propagates repository errors.
pub fn save_store<R: SupplyRepository + ?Sized>(repository: &R, store: &SupplyStore) -> Result<()> {
    repository.save(&InventorySnapshot::from_store(store))
}

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    snapshot: RefCell<Option<InventorySnapshot>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository that already holds `snapshot`.
    pub fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        Self {
            snapshot: RefCell::new(Some(snapshot)),
        }
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<InventorySnapshot> {
        self.snapshot.borrow().clone()
    }
}

impl SupplyRepository for MemoryRepository {
    fn load(&self) -> Result<InventorySnapshot> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, snapshot: &InventorySnapshot) -> Result<()> {
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}
