//! # Integration Test Flows
//!
//! End-to-end flows across the matching, donation, verification, and
//! inventory subsystems over one shared in-memory record store, the way
//! the runtime wires them.
//!
//! ## Flows Tested
//!
//! 1. **Receiver → Donor**: open request, match it, confirm fulfillment
//! 2. **Cooldown**: an accepted match blocks further accepts for 3 months
//! 3. **Hospital → Organization**: verification submit/approve/reject
//! 4. **Organization**: inventory upsert with stock re-classification

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Months, TimeZone, Utc};

    use bl_01_matching::{MatchingApi, MatchingService};
    use bl_02_donation::{
        is_on_cooldown, DonationApi, DonationService, LifecycleError, NewRequest,
    };
    use bl_03_verification::{VerificationApi, VerificationService};
    use bl_04_inventory::{classify, InventoryApi, InventoryService};
    use shared_store::{queries, InMemoryStore, RecordStore};
    use shared_types::{
        BloodGroup, BloodRequest, DonorUser, OrganizationType, OrganizationUser, ReceiverType,
        ReceiverUser, RequestStatus, StockLevel, Timestamp, UrgencyLevel, User,
        VerificationStatus,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 10, 5, 9, 0, 0).unwrap()
    }

    struct World {
        store: Arc<InMemoryStore>,
        matching: MatchingService<InMemoryStore>,
        donations: DonationService<InMemoryStore>,
        verifications: VerificationService<InMemoryStore>,
        inventory: InventoryService<InMemoryStore>,
    }

    impl World {
        fn new() -> Self {
            let store = Arc::new(InMemoryStore::new());
            Self {
                matching: MatchingService::new(Arc::clone(&store)),
                donations: DonationService::new(Arc::clone(&store)),
                verifications: VerificationService::new(Arc::clone(&store)),
                inventory: InventoryService::new(Arc::clone(&store)),
                store,
            }
        }

        fn donor(&self, city: &str, group: BloodGroup) -> DonorUser {
            let donor = DonorUser::register(
                "Asha Verma",
                format!("asha+{}@example.com", group.as_str().to_lowercase()),
                city,
                "9810000001",
                group,
                t0(),
            );
            self.store.save(&User::Donor(donor.clone())).unwrap();
            donor
        }

        fn receiver(&self, city: &str) -> ReceiverUser {
            let receiver = ReceiverUser::register(
                "Ravi Kumar",
                "ravi@example.com",
                city,
                "9810000002",
                ReceiverType::Individual,
                t0(),
            );
            self.store.save(&User::Receiver(receiver.clone())).unwrap();
            receiver
        }

        fn organization(&self, city: &str) -> OrganizationUser {
            let org = OrganizationUser::register(
                format!("{city} Central Blood Bank"),
                format!("bank@{}.example", city.to_lowercase()),
                city,
                "9810000004",
                OrganizationType::BloodBank,
                "BB-042",
                t0(),
            );
            self.store.save(&User::Organization(org.clone())).unwrap();
            org
        }

        fn open_request(
            &self,
            receiver: &ReceiverUser,
            group: BloodGroup,
            urgency: UrgencyLevel,
            now: Timestamp,
        ) -> BloodRequest {
            self.donations
                .open_request(
                    receiver,
                    NewRequest {
                        blood_group: group,
                        units_needed: 2,
                        hospital_name: "Lotus Hospital".into(),
                        urgency_level: urgency,
                        notes: None,
                    },
                    now,
                )
                .unwrap()
        }
    }

    // =============================================================================
    // RECEIVER -> DONOR FLOW
    // =============================================================================

    #[test]
    fn test_accept_match_end_to_end() {
        let world = World::new();
        let donor = world.donor("Delhi", BloodGroup::ONeg);
        let receiver = world.receiver("Delhi");
        let request =
            world.open_request(&receiver, BloodGroup::APos, UrgencyLevel::Emergency, t0());

        // The donor's poll sees the request.
        let candidates = world.matching.candidates_for_donor(&donor).unwrap();
        assert_eq!(candidates.len(), 1);

        let accept_time = t0() + Duration::hours(1);
        let outcome = world
            .donations
            .accept_match(&donor, request.id, accept_time)
            .unwrap();

        // Request is matched and carries the donor reference.
        assert_eq!(outcome.request.status, RequestStatus::Matched);
        assert_eq!(outcome.request.donor_id, Some(donor.id));

        // The donation record and the donor agree on the cooldown end:
        // exactly three calendar months after acceptance.
        let expected_end = accept_time.checked_add_months(Months::new(3)).unwrap();
        assert_eq!(outcome.donation.cooldown_end_date, expected_end);
        assert_eq!(outcome.donor.cooldown_end_date, Some(expected_end));
        assert_eq!(outcome.donor.last_donation_date, Some(accept_time));

        // The matched request no longer shows up in anyone's candidates.
        let after = world.matching.candidates_for_donor(&donor).unwrap();
        assert!(after.is_empty());

        // Receiver confirms; the request reaches its terminal state.
        let fulfilled = world
            .donations
            .mark_fulfilled(request.id, accept_time + Duration::days(1))
            .unwrap();
        assert_eq!(fulfilled.status, RequestStatus::Fulfilled);
        assert!(world.donations.cancel_request(request.id, t0()).is_err());
    }

    #[test]
    fn test_second_donor_cannot_accept_matched_request() {
        let world = World::new();
        let first = world.donor("Delhi", BloodGroup::ONeg);
        let second = world.donor("Delhi", BloodGroup::ONeg);
        let receiver = world.receiver("Delhi");
        let request = world.open_request(&receiver, BloodGroup::APos, UrgencyLevel::Planned, t0());

        world.donations.accept_match(&first, request.id, t0()).unwrap();

        let err = world
            .donations
            .accept_match(&second, request.id, t0())
            .unwrap_err();
        assert!(matches!(err, LifecycleError::RequestNotPending { .. }));
    }

    #[test]
    fn test_cooldown_blocks_next_accept_until_expiry() {
        let world = World::new();
        let donor = world.donor("Delhi", BloodGroup::ONeg);
        let receiver = world.receiver("Delhi");
        let first = world.open_request(&receiver, BloodGroup::APos, UrgencyLevel::Planned, t0());
        let next = world.open_request(&receiver, BloodGroup::BPos, UrgencyLevel::Planned, t0());

        let outcome = world.donations.accept_match(&donor, first.id, t0()).unwrap();
        let donor = outcome.donor;

        // Browsing stays open on cooldown; accepting does not.
        assert!(is_on_cooldown(&donor, t0() + Duration::days(1)));
        assert!(!world.matching.candidates_for_donor(&donor).unwrap().is_empty());
        let err = world
            .donations
            .accept_match(&donor, next.id, t0() + Duration::days(1))
            .unwrap_err();
        assert!(matches!(err, LifecycleError::DonorOnCooldown { days_remaining } if days_remaining > 0));

        // Once the window closes the donor can accept again, with no write
        // needed to clear anything.
        let after_cooldown = outcome.donation.cooldown_end_date;
        assert!(!is_on_cooldown(&donor, after_cooldown));
        assert!(world
            .donations
            .accept_match(&donor, next.id, after_cooldown)
            .is_ok());
    }

    #[test]
    fn test_cancelled_request_is_gone_for_everyone() {
        let world = World::new();
        let donor = world.donor("Delhi", BloodGroup::ONeg);
        let receiver = world.receiver("Delhi");
        let request = world.open_request(&receiver, BloodGroup::APos, UrgencyLevel::Planned, t0());

        world.donations.cancel_request(request.id, t0()).unwrap();

        assert!(world.matching.candidates_for_donor(&donor).unwrap().is_empty());
        let err = world.donations.accept_match(&donor, request.id, t0()).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::RequestNotPending {
                status: RequestStatus::Cancelled,
                ..
            }
        ));
    }

    // =============================================================================
    // MATCHING PROPERTIES OVER THE SHARED STORE
    // =============================================================================

    #[test]
    fn test_city_filter_across_store() {
        let world = World::new();
        let mumbai_donor = world.donor("Mumbai", BloodGroup::ONeg);
        let pune_receiver = world.receiver("Pune");
        world.open_request(&pune_receiver, BloodGroup::APos, UrgencyLevel::Emergency, t0());

        assert!(world
            .matching
            .candidates_for_donor(&mumbai_donor)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_urgency_ordering_across_store() {
        let world = World::new();
        let donor = world.donor("Delhi", BloodGroup::ONeg);
        let receiver = world.receiver("Delhi");

        // Created in order: planned, emergency, within_24_hours.
        world.open_request(&receiver, BloodGroup::APos, UrgencyLevel::Planned, t0());
        world.open_request(
            &receiver,
            BloodGroup::BPos,
            UrgencyLevel::Emergency,
            t0() + Duration::minutes(1),
        );
        world.open_request(
            &receiver,
            BloodGroup::OPos,
            UrgencyLevel::Within24Hours,
            t0() + Duration::minutes(2),
        );

        let urgencies: Vec<_> = world
            .matching
            .candidates_for_donor(&donor)
            .unwrap()
            .into_iter()
            .map(|r| r.urgency_level)
            .collect();
        assert_eq!(
            urgencies,
            vec![
                UrgencyLevel::Emergency,
                UrgencyLevel::Within24Hours,
                UrgencyLevel::Planned
            ]
        );
    }

    #[test]
    fn test_incompatible_donor_sees_nothing_regardless_of_urgency() {
        let world = World::new();
        let ab_donor = world.donor("Delhi", BloodGroup::AbPos);
        let receiver = world.receiver("Delhi");
        world.open_request(&receiver, BloodGroup::ONeg, UrgencyLevel::Emergency, t0());
        world.open_request(&receiver, BloodGroup::APos, UrgencyLevel::Emergency, t0());

        assert!(world.matching.candidates_for_donor(&ab_donor).unwrap().is_empty());

        // The same requests are visible to a compatible donor.
        let o_donor = world.donor("Delhi", BloodGroup::ONeg);
        assert_eq!(world.matching.candidates_for_donor(&o_donor).unwrap().len(), 2);
    }

    // =============================================================================
    // HOSPITAL -> ORGANIZATION FLOW
    // =============================================================================

    #[test]
    fn test_hospital_verification_end_to_end() {
        let world = World::new();
        let org = world.organization("Delhi");
        let hospital = ReceiverUser::register(
            "Lotus Multispeciality Hospital",
            "admin@lotus.example",
            "Delhi",
            "9810000003",
            ReceiverType::Hospital,
            t0(),
        );
        assert!(!hospital.is_verified);
        world.store.save(&User::Receiver(hospital.clone())).unwrap();

        let filed = world.verifications.submit_hospital(&hospital, t0()).unwrap();
        assert_eq!(filed.status, VerificationStatus::Pending);

        // Visible in the organization's city, invisible elsewhere.
        assert_eq!(world.verifications.verifications_in_city("Delhi").unwrap().len(), 1);
        assert!(world.verifications.verifications_in_city("Pune").unwrap().is_empty());

        let review_time = t0() + Duration::hours(4);
        let outcome = world
            .verifications
            .approve(filed.id, &org, Some("License verified".into()), review_time)
            .unwrap();
        assert_eq!(outcome.verification.status, VerificationStatus::Approved);
        assert_eq!(outcome.verification.reviewed_by, Some(org.id));

        // The hospital user was flipped to verified through the email link.
        let stored = world.store.get_by_id::<User>(hospital.id.0).unwrap().unwrap();
        assert!(stored.as_receiver().unwrap().is_verified);

        // The decision is terminal and the first review's metadata survives.
        assert!(world
            .verifications
            .approve(filed.id, &org, None, review_time + Duration::days(1))
            .is_err());
        let after = world
            .store
            .get_by_id::<shared_types::VerificationRequest>(filed.id.0)
            .unwrap()
            .unwrap();
        assert_eq!(after.reviewed_at, Some(review_time));
    }

    #[test]
    fn test_rejected_hospital_stays_unverified() {
        let world = World::new();
        let org = world.organization("Delhi");
        let hospital = ReceiverUser::register(
            "Lotus Multispeciality Hospital",
            "admin@lotus.example",
            "Delhi",
            "9810000003",
            ReceiverType::Hospital,
            t0(),
        );
        world.store.save(&User::Receiver(hospital.clone())).unwrap();
        let filed = world.verifications.submit_hospital(&hospital, t0()).unwrap();

        world
            .verifications
            .reject(filed.id, &org, Some("Incomplete paperwork".into()), t0())
            .unwrap();

        let stored = world.store.get_by_id::<User>(hospital.id.0).unwrap().unwrap();
        assert!(!stored.as_receiver().unwrap().is_verified);
        assert!(queries::pending_verifications(world.store.as_ref())
            .unwrap()
            .is_empty());
    }

    // =============================================================================
    // ORGANIZATION INVENTORY FLOW
    // =============================================================================

    #[test]
    fn test_inventory_write_rederives_stock_level() {
        let world = World::new();
        let org = world.organization("Delhi");
        let expiry = t0() + Duration::days(35);

        for (units, expected) in [
            (0, StockLevel::Critical),
            (4, StockLevel::Low),
            (5, StockLevel::Adequate),
            (19, StockLevel::Adequate),
            (20, StockLevel::Full),
        ] {
            let item = world
                .inventory
                .set_units(&org, BloodGroup::ONeg, units, expiry, t0())
                .unwrap();
            assert_eq!(item.stock_level, expected);
            assert_eq!(item.stock_level, classify(units));
        }

        // Five writes to the same (organization, group) pair, one item.
        assert_eq!(world.inventory.organization_inventory(org.id).unwrap().len(), 1);
    }
}
