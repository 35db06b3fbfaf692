//! # Inbound Port - DonationApi
//!
//! Primary driving port for the receiver and donor dashboards.
//!
//! All operations are synchronous and run to completion; failures are
//! reported directly to the caller with no retries or background recovery.

use shared_types::{BloodRequest, DonationRecord, DonorUser, ReceiverUser, RequestId, Timestamp, UserId};

use crate::domain::errors::LifecycleError;
use crate::domain::value_objects::{AcceptOutcome, NewRequest};

/// Primary API for the donation lifecycle subsystem.
pub trait DonationApi: Send + Sync {
    /// Opens a pending request on behalf of a receiver.
    ///
    /// # Errors
    /// - `InvalidUnits`: units needed outside 1..=10
    fn open_request(
        &self,
        receiver: &ReceiverUser,
        params: NewRequest,
        now: Timestamp,
    ) -> Result<BloodRequest, LifecycleError>;

    /// Donor accepts a pending request.
    ///
    /// Commits, as one unit: the request moved to `matched` with donor
    /// fields set, a new donation log entry, and the donor's 3-month
    /// cooldown. All preconditions are checked before any write.
    ///
    /// # Errors
    /// - `RequestNotFound`: no such request
    /// - `RequestNotPending`: request already matched/fulfilled/cancelled
    /// - `DonorOnCooldown`: donor's cooldown window is still open
    fn accept_match(
        &self,
        donor: &DonorUser,
        request_id: RequestId,
        now: Timestamp,
    ) -> Result<AcceptOutcome, LifecycleError>;

    /// Receiver withdraws a still-pending request.
    fn cancel_request(
        &self,
        request_id: RequestId,
        now: Timestamp,
    ) -> Result<BloodRequest, LifecycleError>;

    /// Receiver confirms a matched request was fulfilled.
    fn mark_fulfilled(
        &self,
        request_id: RequestId,
        now: Timestamp,
    ) -> Result<BloodRequest, LifecycleError>;

    /// One donor's append-only donation history.
    fn donation_history(&self, donor_id: UserId) -> Result<Vec<DonationRecord>, LifecycleError>;
}
