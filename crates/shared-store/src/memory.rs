//! In-memory reference adapter.
//!
//! Keeps each collection as a vector of JSON documents behind a
//! `parking_lot::RwLock`, mirroring the serialized-record shape any real
//! backend would persist. Suitable for tests and single-process runtimes.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use crate::record::StoreRecord;
use crate::store::{RecordStore, StoreError};

/// JSON-document record store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<&'static str, Vec<Value>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently in `T`'s collection.
    pub fn len<T: StoreRecord>(&self) -> usize {
        self.collections
            .read()
            .get(T::COLLECTION)
            .map_or(0, Vec::len)
    }

    /// Returns true if `T`'s collection holds no records.
    pub fn is_empty<T: StoreRecord>(&self) -> bool {
        self.len::<T>() == 0
    }

    fn decode<T: StoreRecord>(doc: &Value) -> Result<T, StoreError> {
        serde_json::from_value(doc.clone()).map_err(|source| StoreError::Serialization {
            collection: T::COLLECTION,
            source,
        })
    }

    fn encode<T: StoreRecord>(record: &T) -> Result<Value, StoreError> {
        serde_json::to_value(record).map_err(|source| StoreError::Serialization {
            collection: T::COLLECTION,
            source,
        })
    }
}

impl RecordStore for InMemoryStore {
    fn get_all<T: StoreRecord>(&self) -> Result<Vec<T>, StoreError> {
        let collections = self.collections.read();
        collections
            .get(T::COLLECTION)
            .map(|docs| docs.iter().map(Self::decode).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn save<T: StoreRecord>(&self, record: &T) -> Result<(), StoreError> {
        let doc = Self::encode(record)?;
        let id = doc.get("id").cloned().unwrap_or(Value::Null);

        let mut collections = self.collections.write();
        let docs = collections.entry(T::COLLECTION).or_default();
        match docs.iter_mut().find(|d| d.get("id") == Some(&id)) {
            // Upsert: replace in place, last writer wins.
            Some(existing) => *existing = doc,
            None => docs.push(doc),
        }
        Ok(())
    }
}
