//! Verification Service
//!
//! Store-backed implementation of [`VerificationApi`]. Approval resolves
//! the hospital user by case-insensitive email match against receiver-role
//! users; an unresolvable link is logged and tolerated, never fatal.

use std::sync::Arc;

use tracing::{info, warn};

use shared_store::{queries, RecordStore};
use shared_types::{
    OrganizationUser, ReceiverUser, Timestamp, User, VerificationId, VerificationRequest,
};

use crate::domain::errors::VerificationError;
use crate::domain::workflow;
use crate::ports::inbound::{ApprovalOutcome, VerificationApi};

/// Verification service over any record store backend.
pub struct VerificationService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> VerificationService<S> {
    /// Creates a service persisting through `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn load(&self, id: VerificationId) -> Result<VerificationRequest, VerificationError> {
        self.store
            .get_by_id::<VerificationRequest>(id.0)?
            .ok_or(VerificationError::NotFound(id))
    }

    /// Finds the receiver-role user behind a verification's hospital email.
    fn resolve_hospital(&self, email: &str) -> Result<Option<ReceiverUser>, VerificationError> {
        Ok(queries::user_by_email(self.store.as_ref(), email)?.and_then(|user| match user {
            User::Receiver(r) => Some(r),
            // Donor or organization with the same email is not the hospital.
            _ => None,
        }))
    }
}

impl<S: RecordStore> VerificationApi for VerificationService<S> {
    fn submit_hospital(
        &self,
        hospital: &ReceiverUser,
        now: Timestamp,
    ) -> Result<VerificationRequest, VerificationError> {
        let verification = VerificationRequest::submit(
            Some(hospital.id),
            hospital.name.clone(),
            hospital.email.clone(),
            hospital.city.clone(),
            now,
        );
        self.store.save(&verification)?;

        info!(
            verification = %verification.id,
            hospital = %hospital.name,
            city = %hospital.city,
            "Filed hospital verification request"
        );
        Ok(verification)
    }

    fn verifications_in_city(
        &self,
        city: &str,
    ) -> Result<Vec<VerificationRequest>, VerificationError> {
        Ok(self
            .store
            .query_by_field(|v: &VerificationRequest| v.city.as_str(), city)?)
    }

    fn approve(
        &self,
        verification_id: VerificationId,
        reviewer: &OrganizationUser,
        notes: Option<String>,
        now: Timestamp,
    ) -> Result<ApprovalOutcome, VerificationError> {
        let approved = workflow::approve(self.load(verification_id)?, reviewer, notes, now)?;
        self.store.save(&approved)?;

        let hospital = match self.resolve_hospital(&approved.hospital_email)? {
            Some(mut hospital) => {
                hospital.is_verified = true;
                self.store.save(&User::Receiver(hospital.clone()))?;
                info!(
                    verification = %approved.id,
                    hospital = %hospital.id,
                    "Hospital verified"
                );
                Some(hospital)
            }
            None => {
                // Tolerated: the verification decision stands on its own.
                warn!(
                    verification = %approved.id,
                    email = %approved.hospital_email,
                    "No receiver user matches the verification email"
                );
                None
            }
        };

        Ok(ApprovalOutcome {
            verification: approved,
            hospital,
        })
    }

    fn reject(
        &self,
        verification_id: VerificationId,
        reviewer: &OrganizationUser,
        notes: Option<String>,
        now: Timestamp,
    ) -> Result<VerificationRequest, VerificationError> {
        let rejected = workflow::reject(self.load(verification_id)?, reviewer, notes, now)?;
        self.store.save(&rejected)?;

        info!(verification = %rejected.id, "Verification rejected");
        Ok(rejected)
    }
}
