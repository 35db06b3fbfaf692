//! Matching Service
//!
//! Store-backed implementation of [`MatchingApi`]: loads the request pool
//! and delegates to the pure engine.

use std::sync::Arc;

use tracing::debug;

use shared_store::RecordStore;
use shared_types::{BloodRequest, DonorUser};

use crate::domain::engine::find_candidates;
use crate::domain::errors::MatchingError;
use crate::ports::inbound::MatchingApi;

/// Matching service over any record store backend.
pub struct MatchingService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> MatchingService<S> {
    /// Creates a service reading the request pool from `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: RecordStore> MatchingApi for MatchingService<S> {
    fn candidates_for_donor(&self, donor: &DonorUser) -> Result<Vec<BloodRequest>, MatchingError> {
        let pool = self.store.get_all::<BloodRequest>()?;
        let candidates = find_candidates(donor, &pool);

        debug!(
            donor = %donor.id,
            blood_group = %donor.blood_group,
            city = %donor.city,
            pool_size = pool.len(),
            candidates = candidates.len(),
            "Matched donor against request pool"
        );

        Ok(candidates)
    }
}
