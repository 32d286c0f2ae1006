use std::fmt;
use std::str::FromStr;

use crate::SupplyError;

/// Store-assigned identifier of a supply item. Always positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct SupplyId(u32);

impl SupplyId {
    pub const FIRST: SupplyId = SupplyId(1);

    pub fn new(value: u32) -> Result<Self, SupplyError> {
        if value == 0 {
            return Err(SupplyError::InvalidId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` once the id space is exhausted.
    pub fn next(self) -> Option<SupplyId> {
        self.0.checked_add(1).map(SupplyId)
    }
}

impl TryFrom<u32> for SupplyId {
    type Error = SupplyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SupplyId::new(value)
    }
}

impl From<SupplyId> for u32 {
    fn from(id: SupplyId) -> Self {
        id.0
    }
}

impl FromStr for SupplyId {
    type Err = SupplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| SupplyError::InvalidId(s.to_string()))?;
        SupplyId::new(value)
    }
}

impl fmt::Display for SupplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
