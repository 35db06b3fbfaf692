//! The review state machine: `pending -> approved | rejected`, terminal
//! either way.

use shared_types::{OrganizationUser, Timestamp, VerificationRequest, VerificationStatus};

use super::errors::VerificationError;

fn review(
    mut verification: VerificationRequest,
    status: VerificationStatus,
    reviewer: &OrganizationUser,
    notes: Option<String>,
    now: Timestamp,
) -> Result<VerificationRequest, VerificationError> {
    if verification.status != VerificationStatus::Pending {
        return Err(VerificationError::AlreadyReviewed {
            id: verification.id,
            status: verification.status,
        });
    }

    verification.status = status;
    verification.reviewed_by = Some(reviewer.id);
    verification.reviewed_at = Some(now);
    verification.notes = notes;
    Ok(verification)
}

/// `pending -> approved`: records the reviewer's decision.
pub fn approve(
    verification: VerificationRequest,
    reviewer: &OrganizationUser,
    notes: Option<String>,
    now: Timestamp,
) -> Result<VerificationRequest, VerificationError> {
    review(verification, VerificationStatus::Approved, reviewer, notes, now)
}

/// `pending -> rejected`: records the reviewer's decision.
pub fn reject(
    verification: VerificationRequest,
    reviewer: &OrganizationUser,
    notes: Option<String>,
    now: Timestamp,
) -> Result<VerificationRequest, VerificationError> {
    review(verification, VerificationStatus::Rejected, reviewer, notes, now)
}
