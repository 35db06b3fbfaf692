//! Cross-collection queries shared by the dashboard-facing services.
//!
//! Free functions over any [`RecordStore`], so every backend gets them
//! for free.

use shared_types::{
    BloodRequest, DonationRecord, InventoryItem, RequestStatus, User, UserId, VerificationRequest,
    VerificationStatus,
};

use crate::store::{RecordStore, StoreError};

/// Looks a user up by email, case-insensitively.
pub fn user_by_email<S: RecordStore>(store: &S, email: &str) -> Result<Option<User>, StoreError> {
    let needle = email.to_lowercase();
    Ok(store
        .get_all::<User>()?
        .into_iter()
        .find(|u| u.email().to_lowercase() == needle))
}

/// All requests opened by one receiver, regardless of status.
pub fn requests_by_receiver<S: RecordStore>(
    store: &S,
    receiver_id: UserId,
) -> Result<Vec<BloodRequest>, StoreError> {
    store.query_by_field(|r: &BloodRequest| &r.receiver_id, &receiver_id)
}

/// Pending requests in one city (the organization dashboard's area view).
pub fn pending_requests_in_city<S: RecordStore>(
    store: &S,
    city: &str,
) -> Result<Vec<BloodRequest>, StoreError> {
    Ok(store
        .get_all::<BloodRequest>()?
        .into_iter()
        .filter(|r| r.city == city && r.status == RequestStatus::Pending)
        .collect())
}

/// One donor's append-only donation history.
pub fn donations_by_donor<S: RecordStore>(
    store: &S,
    donor_id: UserId,
) -> Result<Vec<DonationRecord>, StoreError> {
    store.query_by_field(|d: &DonationRecord| &d.donor_id, &donor_id)
}

/// One organization's inventory items.
pub fn inventory_by_organization<S: RecordStore>(
    store: &S,
    organization_id: UserId,
) -> Result<Vec<InventoryItem>, StoreError> {
    store.query_by_field(|i: &InventoryItem| &i.organization_id, &organization_id)
}

/// Inventory held by every organization serving one city.
pub fn inventory_by_city<S: RecordStore>(
    store: &S,
    city: &str,
) -> Result<Vec<InventoryItem>, StoreError> {
    let org_ids: Vec<UserId> = store
        .get_all::<User>()?
        .into_iter()
        .filter_map(|u| match u {
            User::Organization(org) if org.city == city => Some(org.id),
            _ => None,
        })
        .collect();

    Ok(store
        .get_all::<InventoryItem>()?
        .into_iter()
        .filter(|i| org_ids.contains(&i.organization_id))
        .collect())
}

/// Verification requests still awaiting review.
pub fn pending_verifications<S: RecordStore>(
    store: &S,
) -> Result<Vec<VerificationRequest>, StoreError> {
    Ok(store
        .get_all::<VerificationRequest>()?
        .into_iter()
        .filter(|v| v.status == VerificationStatus::Pending)
        .collect())
}
