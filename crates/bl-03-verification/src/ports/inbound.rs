//! # Inbound Port - VerificationApi
//!
//! Primary driving port for the organization verification dashboard.

use shared_types::{
    OrganizationUser, ReceiverUser, Timestamp, VerificationId, VerificationRequest,
};

use crate::domain::errors::VerificationError;

/// Outcome of an approval: the reviewed verification, and the hospital user
/// if the email link resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalOutcome {
    pub verification: VerificationRequest,
    /// `None` when no receiver-role user matched the verification's
    /// hospital email; the approval still commits.
    pub hospital: Option<ReceiverUser>,
}

/// Primary API for the verification subsystem.
pub trait VerificationApi: Send + Sync {
    /// Files a pending verification for a hospital receiver at
    /// registration time.
    fn submit_hospital(
        &self,
        hospital: &ReceiverUser,
        now: Timestamp,
    ) -> Result<VerificationRequest, VerificationError>;

    /// Verifications visible to an organization: exactly those filed in
    /// the organization's own city.
    fn verifications_in_city(&self, city: &str)
        -> Result<Vec<VerificationRequest>, VerificationError>;

    /// Approves a pending verification and marks the linked hospital user
    /// as verified.
    ///
    /// # Errors
    /// - `NotFound`: no such verification
    /// - `AlreadyReviewed`: the decision is terminal
    fn approve(
        &self,
        verification_id: VerificationId,
        reviewer: &OrganizationUser,
        notes: Option<String>,
        now: Timestamp,
    ) -> Result<ApprovalOutcome, VerificationError>;

    /// Rejects a pending verification. No effect on any user record.
    fn reject(
        &self,
        verification_id: VerificationId,
        reviewer: &OrganizationUser,
        notes: Option<String>,
        now: Timestamp,
    ) -> Result<VerificationRequest, VerificationError>;
}
