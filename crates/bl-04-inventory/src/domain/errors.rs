//! Inventory error types.

use shared_store::StoreError;
use thiserror::Error;

/// Maximum units one organization can hold of one blood group.
pub const MAX_UNITS: u32 = 1000;

/// Inventory subsystem failure.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Unit count outside the accepted range.
    #[error("unit count {units} exceeds the maximum of {max}")]
    UnitsOutOfRange { units: u32, max: u32 },

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
