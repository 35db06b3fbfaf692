//! Candidate selection: filter the request pool, rank what survives.

use shared_types::{BloodRequest, DonorUser, RequestStatus};

use super::compatibility::can_donate_to;

/// Returns the requests `donor` may fulfill, most urgent first.
///
/// Filter, all must hold:
/// 1. request is still pending;
/// 2. request city equals the donor's city (exact string equality);
/// 3. the donor's group can supply the requested group.
///
/// Ordering: urgency rank ascending (emergency first), then creation time
/// descending (newest first). The sort is stable, so requests tied on both
/// keys keep their encounter order from the pool.
///
/// Pure: inputs are not mutated and repeated calls with the same pool give
/// the same answer, which is what lets dashboards re-invoke it on a timer.
pub fn find_candidates(donor: &DonorUser, pool: &[BloodRequest]) -> Vec<BloodRequest> {
    let mut candidates: Vec<BloodRequest> = pool
        .iter()
        .filter(|request| {
            request.status == RequestStatus::Pending
                && request.city == donor.city
                && can_donate_to(donor.blood_group, request.blood_group)
        })
        .cloned()
        .collect();

    candidates.sort_by(|a, b| {
        a.urgency_level
            .rank()
            .cmp(&b.urgency_level.rank())
            .then(b.created_at.cmp(&a.created_at))
    });

    candidates
}
