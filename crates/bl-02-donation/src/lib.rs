//! # Donation Lifecycle Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Governs blood-request status transitions and donor cooldown enforcement
//! when a match is accepted.
//!
//! ## State Machine
//!
//! ```text
//! [PENDING] ──accept_match──→ [MATCHED] ──mark_fulfilled──→ [FULFILLED]
//!     │
//!     └──cancel_request──→ [CANCELLED]
//! ```
//!
//! `FULFILLED` and `CANCELLED` are terminal; every transition helper refuses
//! a wrong-state move without mutating anything.
//!
//! ## Cooldown
//!
//! Accepting a match starts a fixed 3-calendar-month cooldown. Whether a
//! donor is on cooldown is always computed from `(cooldown_end_date, now)`;
//! it is never cached as a boolean, so it expires without any write.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs         - DonationApi trait
//! application/service.rs   - DonationService (store-backed orchestration)
//! domain/lifecycle.rs      - request state machine
//! domain/cooldown.rs       - cooldown predicate + days remaining
//! domain/value_objects.rs  - NewRequest, AcceptOutcome
//! domain/errors.rs         - LifecycleError enum
//! ```

pub mod application;
pub mod domain;
pub mod ports;

pub use application::DonationService;
pub use domain::cooldown::{cooldown_end_after, days_remaining, is_on_cooldown, COOLDOWN_MONTHS};
pub use domain::errors::LifecycleError;
pub use domain::value_objects::{AcceptOutcome, NewRequest};
pub use ports::inbound::DonationApi;
