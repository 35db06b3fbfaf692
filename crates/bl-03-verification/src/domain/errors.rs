//! Verification error types.

use shared_store::StoreError;
use shared_types::{VerificationId, VerificationStatus};
use thiserror::Error;

/// Verification workflow failure.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The verification has already been approved or rejected.
    #[error("verification {id} is already {status:?}; reviews are terminal")]
    AlreadyReviewed {
        id: VerificationId,
        status: VerificationStatus,
    },

    /// No verification with this id exists in the store.
    #[error("verification {0} not found")]
    NotFound(VerificationId),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
