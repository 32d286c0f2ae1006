//! Versioned on-disk form of the inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medsupply_core::SupplyStore;
use medsupply_model::{SupplyId, SupplyItem};

/// Current schema version. Bump when the document shape changes.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Everything needed to rebuild a [`SupplyStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    /// High-water id mark, so deleted ids stay retired across sessions.
    /// `null` once every id has been assigned.
    #[serde(default = "first_id")]
    pub next_id: Option<SupplyId>,
    pub items: Vec<SupplyItem>,
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            next_id: Some(SupplyId::FIRST),
            items: Vec::new(),
        }
    }
}

impl InventorySnapshot {
    pub fn from_store(store: &SupplyStore) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            next_id: store.next_id(),
            items: store.list().to_vec(),
        }
    }

    /// Rebuild the store.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot holds duplicate ids or a record that breaks
    /// the item invariants.
    pub fn into_store(self) -> medsupply_model::Result<SupplyStore> {
        SupplyStore::from_parts(self.items, self.next_id)
    }

    /// Update the saved timestamp.
    pub fn touch(&mut self) {
        self.saved_at = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn first_id() -> Option<SupplyId> {
    Some(SupplyId::FIRST)
}
