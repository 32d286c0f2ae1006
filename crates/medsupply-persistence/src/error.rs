//! Persistence error types.
//!
//! Every variant carries enough context for a user-facing message and an
//! optional remediation hint.

use std::path::PathBuf;
use thiserror::Error;

use medsupply_model::SupplyError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON inventory document.
    #[error("Invalid inventory file: {path}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inventory file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// The document parsed but its records are inconsistent (e.g. duplicate ids).
    #[error("Inventory data is inconsistent")]
    Inconsistent {
        #[source]
        source: SupplyError,
    },

    #[error("Failed to serialize inventory")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The temp file could not be renamed over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::InvalidFormat { path, source } => format!(
                "The file at {} is not a valid inventory file: {}",
                path.display(),
                source
            ),
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => format!(
                "This inventory file was written by a newer version \
                 (file version {found}, this version supports up to {max_supported})."
            ),
            Self::Inconsistent { source } => {
                format!("The inventory contains inconsistent records: {source}")
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the inventory.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                target_path.display()
            ),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the data file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => {
                Some("Point --data at an inventory file, or move the file aside to start fresh.".into())
            }
            Self::UnsupportedVersion { .. } => Some("Update to the latest release.".into()),
            Self::Inconsistent { .. } => {
                Some("Fix the reported record by hand or restore a backup.".into())
            }
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
