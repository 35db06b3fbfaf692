//! Binding between entity types and their store collections.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use shared_types::{BloodRequest, DonationRecord, InventoryItem, User, VerificationRequest};

/// A persistable record: names its collection and exposes its identity.
pub trait StoreRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection this record lives in.
    const COLLECTION: &'static str;

    /// The record's identity, used as the upsert key.
    fn record_id(&self) -> Uuid;
}

impl StoreRecord for User {
    const COLLECTION: &'static str = "users";

    fn record_id(&self) -> Uuid {
        self.id().0
    }
}

impl StoreRecord for BloodRequest {
    const COLLECTION: &'static str = "blood_requests";

    fn record_id(&self) -> Uuid {
        self.id.0
    }
}

impl StoreRecord for DonationRecord {
    const COLLECTION: &'static str = "donations";

    fn record_id(&self) -> Uuid {
        self.id.0
    }
}

impl StoreRecord for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn record_id(&self) -> Uuid {
        self.id.0
    }
}

impl StoreRecord for VerificationRequest {
    const COLLECTION: &'static str = "verifications";

    fn record_id(&self) -> Uuid {
        self.id.0
    }
}
