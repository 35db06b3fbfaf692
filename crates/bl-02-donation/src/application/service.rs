//! Donation Service
//!
//! Store-backed implementation of [`DonationApi`].
//!
//! `accept_match` validates every precondition against the snapshot it read
//! before writing anything, then saves the request, the donation record,
//! and the donor. There is no optimistic lock: if two donors accept the
//! same request from the same snapshot, the last save wins (the documented
//! extension point for stronger arbitration).

use std::sync::Arc;

use tracing::info;

use shared_store::{queries, RecordStore};
use shared_types::{
    BloodRequest, DonationRecord, DonorUser, ReceiverUser, RequestId, Timestamp, User, UserId,
};

use crate::domain::cooldown::{days_remaining, is_on_cooldown};
use crate::domain::errors::LifecycleError;
use crate::domain::lifecycle;
use crate::domain::value_objects::{AcceptOutcome, NewRequest};
use crate::ports::inbound::DonationApi;

const MAX_UNITS_PER_REQUEST: u32 = 10;

/// Donation lifecycle service over any record store backend.
pub struct DonationService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> DonationService<S> {
    /// Creates a service persisting through `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn load_request(&self, id: RequestId) -> Result<BloodRequest, LifecycleError> {
        self.store
            .get_by_id::<BloodRequest>(id.0)?
            .ok_or(LifecycleError::RequestNotFound(id))
    }
}

impl<S: RecordStore> DonationApi for DonationService<S> {
    fn open_request(
        &self,
        receiver: &ReceiverUser,
        params: NewRequest,
        now: Timestamp,
    ) -> Result<BloodRequest, LifecycleError> {
        if params.units_needed == 0 || params.units_needed > MAX_UNITS_PER_REQUEST {
            return Err(LifecycleError::InvalidUnits(params.units_needed));
        }

        let request = BloodRequest::open(
            receiver,
            params.blood_group,
            params.units_needed,
            params.hospital_name,
            params.urgency_level,
            params.notes,
            now,
        );
        self.store.save(&request)?;

        info!(
            request = %request.id,
            blood_group = %request.blood_group,
            city = %request.city,
            urgency = ?request.urgency_level,
            "Opened blood request"
        );
        Ok(request)
    }

    fn accept_match(
        &self,
        donor: &DonorUser,
        request_id: RequestId,
        now: Timestamp,
    ) -> Result<AcceptOutcome, LifecycleError> {
        // All preconditions first; nothing is written on a refusal.
        if is_on_cooldown(donor, now) {
            return Err(LifecycleError::DonorOnCooldown {
                days_remaining: days_remaining(donor, now),
            });
        }
        let request = self.load_request(request_id)?;

        let updated_request = lifecycle::match_with_donor(request, donor, now)?;
        let donation = lifecycle::donation_record(&updated_request, donor, now);
        let updated_donor = lifecycle::start_cooldown(donor.clone(), now);

        self.store.save(&updated_request)?;
        self.store.save(&donation)?;
        self.store.save(&User::Donor(updated_donor.clone()))?;

        info!(
            request = %updated_request.id,
            donor = %updated_donor.id,
            cooldown_end = %donation.cooldown_end_date,
            "Accepted match; cooldown started"
        );

        Ok(AcceptOutcome {
            request: updated_request,
            donation,
            donor: updated_donor,
        })
    }

    fn cancel_request(
        &self,
        request_id: RequestId,
        now: Timestamp,
    ) -> Result<BloodRequest, LifecycleError> {
        let cancelled = lifecycle::cancel(self.load_request(request_id)?, now)?;
        self.store.save(&cancelled)?;

        info!(request = %cancelled.id, "Cancelled blood request");
        Ok(cancelled)
    }

    fn mark_fulfilled(
        &self,
        request_id: RequestId,
        now: Timestamp,
    ) -> Result<BloodRequest, LifecycleError> {
        let fulfilled = lifecycle::fulfill(self.load_request(request_id)?, now)?;
        self.store.save(&fulfilled)?;

        info!(request = %fulfilled.id, "Request confirmed fulfilled");
        Ok(fulfilled)
    }

    fn donation_history(&self, donor_id: UserId) -> Result<Vec<DonationRecord>, LifecycleError> {
        Ok(queries::donations_by_donor(self.store.as_ref(), donor_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use shared_store::InMemoryStore;
    use shared_types::{BloodGroup, ReceiverType, RequestStatus, UrgencyLevel};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    fn service() -> (Arc<InMemoryStore>, DonationService<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = DonationService::new(Arc::clone(&store));
        (store, service)
    }

    fn receiver() -> ReceiverUser {
        ReceiverUser::register(
            "Ravi",
            "ravi@example.com",
            "Delhi",
            "8000000000",
            ReceiverType::Individual,
            t0(),
        )
    }

    fn donor() -> DonorUser {
        DonorUser::register(
            "Asha",
            "asha@example.com",
            "Delhi",
            "9000000000",
            BloodGroup::ONeg,
            t0(),
        )
    }

    fn new_request(units: u32) -> NewRequest {
        NewRequest {
            blood_group: BloodGroup::APos,
            units_needed: units,
            hospital_name: "Sunrise Clinic".into(),
            urgency_level: UrgencyLevel::Emergency,
            notes: None,
        }
    }

    #[test]
    fn test_open_request_rejects_bad_units() {
        let (_, service) = service();
        let r = receiver();
        assert!(matches!(
            service.open_request(&r, new_request(0), t0()),
            Err(LifecycleError::InvalidUnits(0))
        ));
        assert!(matches!(
            service.open_request(&r, new_request(11), t0()),
            Err(LifecycleError::InvalidUnits(11))
        ));
        assert!(service.open_request(&r, new_request(10), t0()).is_ok());
    }

    #[test]
    fn test_accept_match_commits_all_three_records() {
        let (store, service) = service();
        let d = donor();
        let opened = service.open_request(&receiver(), new_request(2), t0()).unwrap();

        let accept_time = t0() + Duration::hours(2);
        let outcome = service.accept_match(&d, opened.id, accept_time).unwrap();

        assert_eq!(outcome.request.status, RequestStatus::Matched);
        assert_eq!(outcome.request.donor_id, Some(d.id));
        assert_eq!(outcome.donation.donation_date, accept_time);
        assert_eq!(
            outcome.donor.cooldown_end_date,
            Some(outcome.donation.cooldown_end_date)
        );

        // All three records landed in the store.
        let stored_request = store.get_by_id::<BloodRequest>(opened.id.0).unwrap().unwrap();
        assert_eq!(stored_request.status, RequestStatus::Matched);
        assert_eq!(store.len::<DonationRecord>(), 1);
        let stored_donor = store.get_by_id::<User>(d.id.0).unwrap().unwrap();
        assert!(stored_donor.as_donor().unwrap().cooldown_end_date.is_some());
    }

    #[test]
    fn test_accept_match_refused_on_cooldown_writes_nothing() {
        let (store, service) = service();
        let mut d = donor();
        d.cooldown_end_date = Some(t0() + Duration::days(30));
        let opened = service.open_request(&receiver(), new_request(1), t0()).unwrap();

        let err = service.accept_match(&d, opened.id, t0()).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::DonorOnCooldown { days_remaining: 30 }
        ));

        let stored = store.get_by_id::<BloodRequest>(opened.id.0).unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
        assert_eq!(store.len::<DonationRecord>(), 0);
    }

    #[test]
    fn test_accept_match_allowed_after_cooldown_expiry() {
        let (_, service) = service();
        let mut d = donor();
        d.cooldown_end_date = Some(t0() - Duration::seconds(1));
        let opened = service.open_request(&receiver(), new_request(1), t0()).unwrap();

        assert!(service.accept_match(&d, opened.id, t0()).is_ok());
    }

    #[test]
    fn test_accept_match_on_cancelled_request_fails() {
        let (_, service) = service();
        let opened = service.open_request(&receiver(), new_request(1), t0()).unwrap();
        service.cancel_request(opened.id, t0()).unwrap();

        let err = service.accept_match(&donor(), opened.id, t0()).unwrap_err();
        assert!(matches!(err, LifecycleError::RequestNotPending { .. }));
    }

    #[test]
    fn test_accept_match_unknown_request() {
        let (_, service) = service();
        let err = service
            .accept_match(&donor(), RequestId::generate(), t0())
            .unwrap_err();
        assert!(matches!(err, LifecycleError::RequestNotFound(_)));
    }

    #[test]
    fn test_full_lifecycle_pending_matched_fulfilled() {
        let (_, service) = service();
        let opened = service.open_request(&receiver(), new_request(1), t0()).unwrap();
        service.accept_match(&donor(), opened.id, t0()).unwrap();

        let fulfilled = service
            .mark_fulfilled(opened.id, t0() + Duration::days(1))
            .unwrap();
        assert_eq!(fulfilled.status, RequestStatus::Fulfilled);

        // Terminal: nothing moves a fulfilled request.
        assert!(service.cancel_request(opened.id, t0()).is_err());
        assert!(service.mark_fulfilled(opened.id, t0()).is_err());
    }

    #[test]
    fn test_mark_fulfilled_requires_matched() {
        let (_, service) = service();
        let opened = service.open_request(&receiver(), new_request(1), t0()).unwrap();
        assert!(matches!(
            service.mark_fulfilled(opened.id, t0()),
            Err(LifecycleError::RequestNotMatched { .. })
        ));
    }

    #[test]
    fn test_donation_history_grows_append_only() {
        let (_, service) = service();
        let d = donor();
        let opened = service.open_request(&receiver(), new_request(1), t0()).unwrap();
        let outcome = service.accept_match(&d, opened.id, t0()).unwrap();

        let history = service.donation_history(d.id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, outcome.donation.id);
    }
}
