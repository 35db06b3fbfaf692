//! # Inbound Port - InventoryApi
//!
//! Primary driving port for the organization inventory dashboard.

use shared_types::{BloodGroup, InventoryItem, OrganizationUser, Timestamp, UserId};

use crate::domain::errors::InventoryError;

/// Primary API for the inventory subsystem.
pub trait InventoryApi: Send + Sync {
    /// Sets the unit count for one (organization, blood group) pair,
    /// re-deriving the stock level and `last_updated` in the same write.
    ///
    /// Upserts: updates the existing item for the pair if present,
    /// creates it otherwise.
    ///
    /// # Errors
    /// - `UnitsOutOfRange`: more than 1000 units
    fn set_units(
        &self,
        organization: &OrganizationUser,
        blood_group: BloodGroup,
        units: u32,
        expiry_date: Timestamp,
        now: Timestamp,
    ) -> Result<InventoryItem, InventoryError>;

    /// One organization's items.
    fn organization_inventory(
        &self,
        organization_id: UserId,
    ) -> Result<Vec<InventoryItem>, InventoryError>;

    /// Items held by every organization serving `city`.
    fn city_inventory(&self, city: &str) -> Result<Vec<InventoryItem>, InventoryError>;

    /// Items at critical or low stock for one organization (the dashboard's
    /// alert banner).
    fn needs_attention(&self, organization_id: UserId)
        -> Result<Vec<InventoryItem>, InventoryError>;
}
