//! Durable storage for the supply inventory.
//!
//! The inventory core is storage-agnostic; this crate supplies the
//! [`SupplyRepository`] seam it is loaded from and saved through, plus two
//! implementations:
//!
//! - [`JsonFileRepository`] - a versioned JSON document written atomically
//! - [`MemoryRepository`] - an in-process stand-in for tests
//!
//! # Example
//!
//! ```ignore
//! use medsupply_persistence::{JsonFileRepository, load_store, save_store};
//!
//! let repo = JsonFileRepository::new("medsupply.json");
//! let mut store = load_store(&repo)?;
//! store.add(input)?;
//! save_store(&repo, &store)?;
//! ```

mod error;
mod json_file;
mod repository;
mod snapshot;

pub use error::{PersistenceError, Result};
pub use json_file::JsonFileRepository;
pub use repository::{MemoryRepository, SupplyRepository, load_store, save_store};
pub use snapshot::{CURRENT_SCHEMA_VERSION, InventorySnapshot};
