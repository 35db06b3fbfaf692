//! # Core Domain Entities
//!
//! Defines the entities persisted by the record store and exchanged between
//! subsystems.
//!
//! ## Clusters
//!
//! - **Actors**: `User` (role-tagged union of `ReceiverUser`, `DonorUser`,
//!   `OrganizationUser`)
//! - **Donation flow**: `BloodRequest`, `DonationRecord`
//! - **Organization operations**: `InventoryItem`, `VerificationRequest`

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DonationId, InventoryId, RequestId, UserId, VerificationId};

/// Wall-clock timestamp used on every persisted record.
pub type Timestamp = DateTime<Utc>;

// =============================================================================
// CLUSTER A: ENUMERATIONS
// =============================================================================

/// One of the eight ABO/Rh blood groups.
///
/// Immutable per entity once assigned. Wire format is the display string
/// (`"A+"`, `"O-"`, ...), matching the persisted record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodGroup {
    /// All eight groups, in registration-form order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APos,
        BloodGroup::ANeg,
        BloodGroup::BPos,
        BloodGroup::BNeg,
        BloodGroup::AbPos,
        BloodGroup::AbNeg,
        BloodGroup::OPos,
        BloodGroup::ONeg,
    ];

    /// The display/wire string for this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::AbPos => "AB+",
            BloodGroup::AbNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown blood group: {s}"))
    }
}

/// How soon a blood request must be served.
///
/// The primary sort key for candidate lists: lower rank is shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Emergency,
    #[serde(rename = "within_24_hours")]
    Within24Hours,
    Planned,
}

impl UrgencyLevel {
    /// Sort rank: `Emergency` = 0, `Within24Hours` = 1, `Planned` = 2.
    pub fn rank(&self) -> u8 {
        match self {
            UrgencyLevel::Emergency => 0,
            UrgencyLevel::Within24Hours => 1,
            UrgencyLevel::Planned => 2,
        }
    }
}

/// Lifecycle state of a blood request.
///
/// Transitions are one-directional:
///
/// ```text
/// [PENDING] ──accept──→ [MATCHED] ──confirm──→ [FULFILLED]
///     │
///     └────cancel────→ [CANCELLED]
/// ```
///
/// `Fulfilled` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Matched,
    Fulfilled,
    Cancelled,
}

impl RequestStatus {
    /// Returns true once no further transition is accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Fulfilled | RequestStatus::Cancelled)
    }
}

/// Stock category derived from an inventory item's unit count.
///
/// Always a pure function of the unit count; never stored without being
/// recomputed in the same write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Critical,
    Low,
    Adequate,
    Full,
}

/// Review state of a hospital verification request.
///
/// Once the status leaves `Pending` it is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Kind of receiver account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverType {
    Individual,
    Hospital,
}

/// Kind of organization account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    BloodBank,
    Ngo,
}

/// Who ultimately fulfilled a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfilledBy {
    Donor,
    Organization,
}

// =============================================================================
// CLUSTER B: ACTORS
// =============================================================================

/// An individual or hospital that posts blood requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub city: String,
    pub contact_number: String,
    pub receiver_type: ReceiverType,
    /// Individuals are verified at registration; hospitals only after an
    /// organization approves their verification request.
    pub is_verified: bool,
    pub created_at: Timestamp,
}

impl ReceiverUser {
    /// Registers a new receiver. Hospital accounts start unverified and
    /// need organization approval before their requests are trusted.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        contact_number: impl Into<String>,
        receiver_type: ReceiverType,
        now: Timestamp,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
            contact_number: contact_number.into(),
            receiver_type,
            is_verified: matches!(receiver_type, ReceiverType::Individual),
            created_at: now,
        }
    }
}

/// A registered donor, subject to a post-donation cooldown.
///
/// Invariant: when both are present, `cooldown_end_date` is never earlier
/// than `last_donation_date`. Both fields are written only by the donation
/// lifecycle subsystem on match acceptance; whether the donor is *currently*
/// on cooldown is always computed from `cooldown_end_date` and a caller
/// supplied `now`, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub city: String,
    pub contact_number: String,
    pub blood_group: BloodGroup,
    pub last_donation_date: Option<Timestamp>,
    pub cooldown_end_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl DonorUser {
    /// Registers a new donor with no donation history.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        contact_number: impl Into<String>,
        blood_group: BloodGroup,
        now: Timestamp,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
            contact_number: contact_number.into(),
            blood_group,
            last_donation_date: None,
            cooldown_end_date: None,
            created_at: now,
        }
    }
}

/// A blood bank or NGO managing inventory and hospital verification for
/// its city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub city: String,
    pub contact_number: String,
    pub organization_type: OrganizationType,
    pub license_id: String,
    pub created_at: Timestamp,
}

impl OrganizationUser {
    /// Registers a new organization.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        contact_number: impl Into<String>,
        organization_type: OrganizationType,
        license_id: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
            contact_number: contact_number.into(),
            organization_type,
            license_id: license_id.into(),
            created_at: now,
        }
    }
}

/// A user account, tagged by role.
///
/// Role branches must match exhaustively; there is no shared base record
/// with optional role fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum User {
    Receiver(ReceiverUser),
    Donor(DonorUser),
    Organization(OrganizationUser),
}

impl User {
    /// Record identity, independent of role.
    pub fn id(&self) -> UserId {
        match self {
            User::Receiver(u) => u.id,
            User::Donor(u) => u.id,
            User::Organization(u) => u.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            User::Receiver(u) => &u.name,
            User::Donor(u) => &u.name,
            User::Organization(u) => &u.name,
        }
    }

    /// Login/contact email.
    pub fn email(&self) -> &str {
        match self {
            User::Receiver(u) => &u.email,
            User::Donor(u) => &u.email,
            User::Organization(u) => &u.email,
        }
    }

    /// Home/service city.
    pub fn city(&self) -> &str {
        match self {
            User::Receiver(u) => &u.city,
            User::Donor(u) => &u.city,
            User::Organization(u) => &u.city,
        }
    }

    /// Returns the receiver record, if this user is a receiver.
    pub fn as_receiver(&self) -> Option<&ReceiverUser> {
        match self {
            User::Receiver(u) => Some(u),
            _ => None,
        }
    }

    /// Returns the donor record, if this user is a donor.
    pub fn as_donor(&self) -> Option<&DonorUser> {
        match self {
            User::Donor(u) => Some(u),
            _ => None,
        }
    }

    /// Returns the organization record, if this user is an organization.
    pub fn as_organization(&self) -> Option<&OrganizationUser> {
        match self {
            User::Organization(u) => Some(u),
            _ => None,
        }
    }
}

// =============================================================================
// CLUSTER C: DONATION FLOW
// =============================================================================

/// A receiver's open need for blood.
///
/// Invariants:
/// - status transitions are one-directional (see [`RequestStatus`]);
/// - `donor_id`/`donor_name`/`donor_contact` are populated if and only if
///   the status is `Matched` or `Fulfilled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: RequestId,
    pub receiver_id: UserId,
    pub receiver_name: String,
    pub receiver_contact: String,
    pub blood_group: BloodGroup,
    /// Units needed; validated to 1..=10 before the request is opened.
    pub units_needed: u32,
    pub hospital_name: String,
    pub city: String,
    pub urgency_level: UrgencyLevel,
    pub notes: Option<String>,
    pub status: RequestStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub donor_id: Option<UserId>,
    pub donor_name: Option<String>,
    pub donor_contact: Option<String>,
    pub fulfilled_by: Option<FulfilledBy>,
    pub organization_id: Option<UserId>,
}

impl BloodRequest {
    /// Opens a new pending request on behalf of a receiver.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        receiver: &ReceiverUser,
        blood_group: BloodGroup,
        units_needed: u32,
        hospital_name: impl Into<String>,
        urgency_level: UrgencyLevel,
        notes: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: RequestId::generate(),
            receiver_id: receiver.id,
            receiver_name: receiver.name.clone(),
            receiver_contact: receiver.contact_number.clone(),
            blood_group,
            units_needed,
            hospital_name: hospital_name.into(),
            city: receiver.city.clone(),
            urgency_level,
            notes,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
            donor_id: None,
            donor_name: None,
            donor_contact: None,
            fulfilled_by: None,
            organization_id: None,
        }
    }
}

/// Append-only log entry created when a donor accepts a match.
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: DonationId,
    pub donor_id: UserId,
    pub request_id: RequestId,
    pub receiver_name: String,
    pub blood_group: BloodGroup,
    pub hospital_name: String,
    pub donation_date: Timestamp,
    pub cooldown_end_date: Timestamp,
}

// =============================================================================
// CLUSTER D: ORGANIZATION OPERATIONS
// =============================================================================

/// One organization's stock of one blood group.
///
/// One logical item per (organization, blood group) pair. `stock_level` is
/// always re-derived from `units` in the same write that changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryId,
    pub organization_id: UserId,
    pub blood_group: BloodGroup,
    /// Units on hand; validated to 0..=1000 before any write.
    pub units: u32,
    pub stock_level: StockLevel,
    pub expiry_date: Timestamp,
    pub last_updated: Timestamp,
}

/// A hospital's request to be verified by an organization in its city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub id: VerificationId,
    /// The hospital's user record, when known. The registration flow files
    /// the verification before the user record exists, so approval resolves
    /// the user by `hospital_email` instead.
    pub hospital_id: Option<UserId>,
    pub hospital_name: String,
    pub hospital_email: String,
    pub city: String,
    pub status: VerificationStatus,
    pub notes: Option<String>,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl VerificationRequest {
    /// Files a new pending verification for a hospital receiver.
    pub fn submit(
        hospital_id: Option<UserId>,
        hospital_name: impl Into<String>,
        hospital_email: impl Into<String>,
        city: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: VerificationId::generate(),
            hospital_id,
            hospital_name: hospital_name.into(),
            hospital_email: hospital_email.into(),
            city: city.into(),
            status: VerificationStatus::Pending,
            notes: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
        }
    }
}
