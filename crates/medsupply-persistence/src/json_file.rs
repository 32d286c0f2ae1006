//! JSON data file storage.
//!
//! The document is a single pretty-printed JSON object:
//!
//! ```text
//! {
//!   "schemaVersion": 1,
//!   "savedAt": "2026-10-18T09:30:00Z",
//!   "nextId": 6,
//!   "items": [ { "id": 1, "name": "Surgical Masks", ... } ]
//! }
//! ```
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! crash mid-save never leaves a truncated inventory behind.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{PersistenceError, Result};
use crate::repository::SupplyRepository;
use crate::snapshot::{CURRENT_SCHEMA_VERSION, InventorySnapshot};

/// Stores the inventory as one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SupplyRepository for JsonFileRepository {
    fn load(&self) -> Result<InventorySnapshot> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No inventory at {}, starting empty", self.path.display());
                return Ok(InventorySnapshot::default());
            }
            Err(error) => {
                return Err(PersistenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: error,
                });
            }
        };

        let snapshot = parse_snapshot(&bytes, &self.path)?;
        tracing::info!(
            "Loaded {} supply items from {}",
            snapshot.items.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &InventorySnapshot) -> Result<()> {
        let mut snapshot = snapshot.clone();
        snapshot.touch();

        let mut bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|source| PersistenceError::Serialization { source })?;
        bytes.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(&bytes).map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

        file.sync_all().map_err(|e| PersistenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: self.path.clone(),
            source: e,
        })?;

        tracing::info!(
            "Saved {} supply items to {}",
            snapshot.items.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Check the schema version before committing to the full document shape.
fn parse_snapshot(bytes: &[u8], path: &Path) -> Result<InventorySnapshot> {
    let invalid = |source| PersistenceError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    };
    let value: Value = serde_json::from_slice(bytes).map_err(invalid)?;

    let version = value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .unwrap_or(u64::from(CURRENT_SCHEMA_VERSION));
    if version > u64::from(CURRENT_SCHEMA_VERSION) {
        return Err(PersistenceError::UnsupportedVersion {
            found: u32::try_from(version).unwrap_or(u32::MAX),
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    serde_json::from_value(value).map_err(invalid)
}
