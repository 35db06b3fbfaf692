//! The [`RecordStore`] port and its error type.

use thiserror::Error;
use uuid::Uuid;

use crate::record::StoreRecord;

/// Record store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record could not be serialized to or from its stored form.
    #[error("serialization error in collection '{collection}': {source}")]
    Serialization {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Outbound port for record persistence.
///
/// Semantics every adapter must honor:
///
/// - `get_all` returns the current contents of a collection; staleness up to
///   one caller polling interval is an accepted property of the system.
/// - `save` is an upsert by record identity: replace in place when a record
///   with the same id exists, append otherwise. Last writer wins; there is
///   no version check (the documented extension point for arbitration of
///   concurrent accepts).
/// - All operations are synchronous and run to completion.
pub trait RecordStore: Send + Sync {
    /// Returns every record in `T`'s collection.
    fn get_all<T: StoreRecord>(&self) -> Result<Vec<T>, StoreError>;

    /// Upserts a record by identity.
    fn save<T: StoreRecord>(&self, record: &T) -> Result<(), StoreError>;

    /// Returns the record with the given identity, if any.
    fn get_by_id<T: StoreRecord>(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        Ok(self
            .get_all::<T>()?
            .into_iter()
            .find(|r| r.record_id() == id))
    }

    /// Returns every record whose `field` projection equals `value`.
    ///
    /// The typed rendition of a query-by-field: callers name the field with
    /// an accessor (`|u: &User| u.city()`) rather than a string key.
    fn query_by_field<T, V, F>(&self, field: F, value: &V) -> Result<Vec<T>, StoreError>
    where
        T: StoreRecord,
        V: PartialEq + ?Sized,
        F: Fn(&T) -> &V,
    {
        Ok(self
            .get_all::<T>()?
            .into_iter()
            .filter(|r| field(r) == value)
            .collect())
    }
}
