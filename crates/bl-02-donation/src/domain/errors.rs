//! Donation lifecycle error types.

use shared_store::StoreError;
use shared_types::{RequestId, RequestStatus};
use thiserror::Error;

/// Donation lifecycle failure.
///
/// Precondition violations refuse the whole operation; no partial state
/// change is ever committed alongside one of these.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The request is not in the `Pending` state required by the operation.
    #[error("request {id} is {status:?}, expected pending")]
    RequestNotPending { id: RequestId, status: RequestStatus },

    /// The request is not in the `Matched` state required by the operation.
    #[error("request {id} is {status:?}, expected matched")]
    RequestNotMatched { id: RequestId, status: RequestStatus },

    /// The donor is still inside the post-donation cooldown window.
    #[error("donor is on cooldown for {days_remaining} more day(s)")]
    DonorOnCooldown { days_remaining: u32 },

    /// No request with this id exists in the store.
    #[error("request {0} not found")]
    RequestNotFound(RequestId),

    /// Units needed must be between 1 and 10.
    #[error("units needed must be 1..=10, got {0}")]
    InvalidUnits(u32),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
