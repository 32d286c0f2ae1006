//! CLI library components for the medical supply dashboard.

#![allow(missing_docs)]

pub mod logging;
pub mod render;
