//! # Matching Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Given a donor profile and the pool of blood requests, produces the
//! ranked, filtered list of requests that donor may fulfill.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Only pending requests are candidates | `domain/engine.rs` filter |
//! | City match is exact and case-sensitive | `domain/engine.rs` filter |
//! | Blood compatibility follows the explicit table | `domain/compatibility.rs` |
//! | Emergency before 24h before planned, newest first within a tier | `domain/engine.rs` stable sort |
//!
//! Matching never mutates its inputs and is safe to re-invoke on a polling
//! interval. A donor on cooldown still receives candidates (browsing is
//! allowed); acceptance is gated by the donation lifecycle subsystem.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs        - MatchingApi trait
//! application/service.rs  - MatchingService (store-backed orchestration)
//! domain/compatibility.rs - donor -> receivers lookup table
//! domain/engine.rs        - pure filter + ranking
//! ```

pub mod application;
pub mod domain;
pub mod ports;

pub use application::MatchingService;
pub use domain::compatibility::{can_donate_to, recipients_for};
pub use domain::engine::find_candidates;
pub use domain::errors::MatchingError;
pub use ports::inbound::MatchingApi;
