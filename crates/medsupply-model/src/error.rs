use thiserror::Error;

use crate::{SupplyField, SupplyId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupplyError {
    /// A numeric field could not be parsed into a non-negative value.
    #[error("{field} must be a valid number, got {value:?}")]
    InvalidNumber { field: SupplyField, value: String },
    /// A required text field was blank.
    #[error("{field} is required")]
    ValidationRequired { field: SupplyField },
    /// A text field carried leading or trailing whitespace.
    #[error("{field} must not start or end with whitespace, got {value:?}")]
    InvalidText { field: SupplyField, value: String },
    #[error("{field} must be one of the listed options, got {value:?}")]
    InvalidChoice { field: SupplyField, value: String },
    #[error("{field} must be a date in YYYY-MM-DD format, got {value:?}")]
    InvalidDate { field: SupplyField, value: String },
    #[error("supply item {id} not found")]
    NotFound { id: SupplyId },
    #[error("supply item id {id} appears more than once")]
    DuplicateId { id: SupplyId },
    #[error("invalid supply item id: {0:?}")]
    InvalidId(String),
    #[error("supply item ids are exhausted")]
    IdsExhausted,
}

impl SupplyError {
    /// The form field this error should be flagged on, if any.
    pub fn field(&self) -> Option<SupplyField> {
        match self {
            Self::InvalidNumber { field, .. }
            | Self::ValidationRequired { field }
            | Self::InvalidText { field, .. }
            | Self::InvalidChoice { field, .. }
            | Self::InvalidDate { field, .. } => Some(*field),
            Self::NotFound { .. }
            | Self::DuplicateId { .. }
            | Self::InvalidId(_)
            | Self::IdsExhausted => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SupplyError>;
