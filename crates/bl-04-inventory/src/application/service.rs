//! Inventory Service
//!
//! Store-backed implementation of [`InventoryApi`]. The unit count is the
//! only authoritative quantity: the stock level is re-derived from it on
//! every write and never trusted as a cached value.

use std::sync::Arc;

use tracing::info;

use shared_store::{queries, RecordStore};
use shared_types::{
    BloodGroup, InventoryId, InventoryItem, OrganizationUser, StockLevel, Timestamp, UserId,
};

use crate::domain::errors::{InventoryError, MAX_UNITS};
use crate::domain::stock::classify;
use crate::ports::inbound::InventoryApi;

/// Inventory service over any record store backend.
pub struct InventoryService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> InventoryService<S> {
    /// Creates a service persisting through `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn find_item(
        &self,
        organization_id: UserId,
        blood_group: BloodGroup,
    ) -> Result<Option<InventoryItem>, InventoryError> {
        Ok(self
            .store
            .get_all::<InventoryItem>()?
            .into_iter()
            .find(|i| i.organization_id == organization_id && i.blood_group == blood_group))
    }
}

impl<S: RecordStore> InventoryApi for InventoryService<S> {
    fn set_units(
        &self,
        organization: &OrganizationUser,
        blood_group: BloodGroup,
        units: u32,
        expiry_date: Timestamp,
        now: Timestamp,
    ) -> Result<InventoryItem, InventoryError> {
        if units > MAX_UNITS {
            return Err(InventoryError::UnitsOutOfRange {
                units,
                max: MAX_UNITS,
            });
        }

        // One logical item per (organization, blood group): reuse the
        // existing identity on update.
        let item = InventoryItem {
            id: self
                .find_item(organization.id, blood_group)?
                .map_or_else(InventoryId::generate, |existing| existing.id),
            organization_id: organization.id,
            blood_group,
            units,
            stock_level: classify(units),
            expiry_date,
            last_updated: now,
        };
        self.store.save(&item)?;

        info!(
            organization = %organization.id,
            blood_group = %blood_group,
            units,
            stock_level = ?item.stock_level,
            "Updated inventory"
        );
        Ok(item)
    }

    fn organization_inventory(
        &self,
        organization_id: UserId,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(queries::inventory_by_organization(
            self.store.as_ref(),
            organization_id,
        )?)
    }

    fn city_inventory(&self, city: &str) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(queries::inventory_by_city(self.store.as_ref(), city)?)
    }

    fn needs_attention(
        &self,
        organization_id: UserId,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(self
            .organization_inventory(organization_id)?
            .into_iter()
            .filter(|i| matches!(i.stock_level, StockLevel::Critical | StockLevel::Low))
            .collect())
    }
}
