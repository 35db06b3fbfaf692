//! # Inbound Port - MatchingApi
//!
//! Primary driving port for the donor dashboard.
//!
//! Callers re-invoke `candidates_for_donor` on a fixed polling interval to
//! pick up request-pool changes made by other actors; the operation itself
//! is synchronous, side-effect free, and safe to repeat.

use shared_types::{BloodRequest, DonorUser};

use crate::domain::errors::MatchingError;

/// Primary API for the matching subsystem.
pub trait MatchingApi: Send + Sync {
    /// Returns the pending requests `donor` may fulfill, most urgent first.
    ///
    /// A donor currently on cooldown still receives the full candidate list;
    /// the donation lifecycle subsystem refuses the actual acceptance.
    fn candidates_for_donor(&self, donor: &DonorUser) -> Result<Vec<BloodRequest>, MatchingError>;
}
