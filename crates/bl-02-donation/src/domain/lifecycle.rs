//! The blood-request state machine.
//!
//! Transitions consume the request and return the mutated copy for the
//! store to persist; a refused transition returns the error without having
//! touched anything.

use shared_types::{
    BloodRequest, DonationId, DonationRecord, DonorUser, FulfilledBy, RequestStatus, Timestamp,
};

use super::cooldown::cooldown_end_after;
use super::errors::LifecycleError;

/// `pending -> matched`: binds the donor to the request.
///
/// Populates the donor reference fields, which by invariant exist exactly
/// while the status is `Matched` or `Fulfilled`.
pub fn match_with_donor(
    mut request: BloodRequest,
    donor: &DonorUser,
    now: Timestamp,
) -> Result<BloodRequest, LifecycleError> {
    if request.status != RequestStatus::Pending {
        return Err(LifecycleError::RequestNotPending {
            id: request.id,
            status: request.status,
        });
    }

    request.status = RequestStatus::Matched;
    request.donor_id = Some(donor.id);
    request.donor_name = Some(donor.name.clone());
    request.donor_contact = Some(donor.contact_number.clone());
    request.fulfilled_by = Some(FulfilledBy::Donor);
    request.updated_at = now;
    Ok(request)
}

/// `pending -> cancelled`: the receiver withdraws the request.
pub fn cancel(mut request: BloodRequest, now: Timestamp) -> Result<BloodRequest, LifecycleError> {
    if request.status != RequestStatus::Pending {
        return Err(LifecycleError::RequestNotPending {
            id: request.id,
            status: request.status,
        });
    }

    request.status = RequestStatus::Cancelled;
    request.updated_at = now;
    Ok(request)
}

/// `matched -> fulfilled`: receiver-initiated confirmation, independent of
/// any donor action.
pub fn fulfill(mut request: BloodRequest, now: Timestamp) -> Result<BloodRequest, LifecycleError> {
    if request.status != RequestStatus::Matched {
        return Err(LifecycleError::RequestNotMatched {
            id: request.id,
            status: request.status,
        });
    }

    request.status = RequestStatus::Fulfilled;
    request.updated_at = now;
    Ok(request)
}

/// Builds the append-only donation log entry for an accepted match.
pub fn donation_record(request: &BloodRequest, donor: &DonorUser, now: Timestamp) -> DonationRecord {
    DonationRecord {
        id: DonationId::generate(),
        donor_id: donor.id,
        request_id: request.id,
        receiver_name: request.receiver_name.clone(),
        blood_group: request.blood_group,
        hospital_name: request.hospital_name.clone(),
        donation_date: now,
        cooldown_end_date: cooldown_end_after(now),
    }
}

/// Returns the donor with donation timestamps advanced to `now`.
pub fn start_cooldown(mut donor: DonorUser, now: Timestamp) -> DonorUser {
    donor.last_donation_date = Some(now);
    donor.cooldown_end_date = Some(cooldown_end_after(now));
    donor
}
