//! Value objects crossing the donation lifecycle boundary.

use serde::{Deserialize, Serialize};

use shared_types::{BloodGroup, BloodRequest, DonationRecord, DonorUser, UrgencyLevel};

/// Parameters for opening a new blood request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRequest {
    pub blood_group: BloodGroup,
    /// Units needed; validated to 1..=10 before the request is created.
    pub units_needed: u32,
    pub hospital_name: String,
    pub urgency_level: UrgencyLevel,
    pub notes: Option<String>,
}

/// Everything `accept_match` commits, returned as one unit.
///
/// The three records are written together: the matched request, the
/// append-only donation log entry, and the donor with the fresh cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptOutcome {
    pub request: BloodRequest,
    pub donation: DonationRecord,
    pub donor: DonorUser,
}
