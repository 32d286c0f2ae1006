pub mod enums;
pub mod error;
pub mod ids;
pub mod item;
pub mod sample;

pub use enums::{Category, StockStatus};
pub use error::{Result, SupplyError};
pub use ids::SupplyId;
pub use item::{
    MAX_UNIT_PRICE, PRICE_SCALE, SupplyField, SupplyItem, SupplyItemInput, is_valid_price,
};
pub use sample::sample_inputs;
