//! Demo data for a locally running node.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use bl_02_donation::{DonationApi, DonationService, NewRequest};
use bl_03_verification::{VerificationApi, VerificationService};
use bl_04_inventory::{InventoryApi, InventoryService};
use shared_store::{InMemoryStore, RecordStore};
use shared_types::{
    BloodGroup, DonorUser, OrganizationType, OrganizationUser, ReceiverType, ReceiverUser,
    UrgencyLevel, User,
};

/// The actors a freshly seeded store contains.
pub struct SeededActors {
    pub donor: DonorUser,
    pub receiver: ReceiverUser,
    pub hospital: ReceiverUser,
    pub organization: OrganizationUser,
}

/// Populates the store with one actor of each role, two open requests, an
/// inventory line, and a pending hospital verification.
pub fn seed_demo_data(store: &Arc<InMemoryStore>) -> Result<SeededActors> {
    let now = Utc::now();

    let donor = DonorUser::register(
        "Asha Verma",
        "asha@example.com",
        "Delhi",
        "9810000001",
        BloodGroup::ONeg,
        now,
    );
    let receiver = ReceiverUser::register(
        "Ravi Kumar",
        "ravi@example.com",
        "Delhi",
        "9810000002",
        ReceiverType::Individual,
        now,
    );
    let hospital = ReceiverUser::register(
        "Lotus Multispeciality Hospital",
        "admin@lotus.example",
        "Delhi",
        "9810000003",
        ReceiverType::Hospital,
        now,
    );
    let organization = OrganizationUser::register(
        "Delhi Central Blood Bank",
        "bank@delhi.example",
        "Delhi",
        "9810000004",
        OrganizationType::BloodBank,
        "DL-BB-042",
        now,
    );

    store.save(&User::Donor(donor.clone()))?;
    store.save(&User::Receiver(receiver.clone()))?;
    store.save(&User::Receiver(hospital.clone()))?;
    store.save(&User::Organization(organization.clone()))?;

    let donations = DonationService::new(Arc::clone(store));
    donations.open_request(
        &receiver,
        NewRequest {
            blood_group: BloodGroup::APos,
            units_needed: 2,
            hospital_name: "Lotus Multispeciality Hospital".into(),
            urgency_level: UrgencyLevel::Emergency,
            notes: Some("Surgery scheduled tomorrow morning".into()),
        },
        now,
    )?;
    donations.open_request(
        &receiver,
        NewRequest {
            blood_group: BloodGroup::BPos,
            units_needed: 1,
            hospital_name: "Green Park Clinic".into(),
            urgency_level: UrgencyLevel::Planned,
            notes: None,
        },
        now,
    )?;

    let inventory = InventoryService::new(Arc::clone(store));
    inventory.set_units(
        &organization,
        BloodGroup::ONeg,
        3,
        now + chrono::Duration::days(35),
        now,
    )?;

    let verifications = VerificationService::new(Arc::clone(store));
    verifications.submit_hospital(&hospital, now)?;

    info!("Seeded demo data: 4 users, 2 requests, 1 inventory line, 1 verification");
    Ok(SeededActors {
        donor,
        receiver,
        hospital,
        organization,
    })
}
