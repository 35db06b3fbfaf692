//! # Verification Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Hospital-receiver verification: organizations review registration
//! requests from hospitals in their own city and approve or reject them.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | A verification is visible only to organizations in its city | `application/service.rs` city scope |
//! | Only pending verifications can be reviewed | `domain/workflow.rs` |
//! | Approved/rejected are terminal | `domain/workflow.rs` |
//! | Approval flips the hospital user's `is_verified` flag | `application/service.rs` |
//!
//! The hospital user is located by case-insensitive email match. A miss is
//! tolerated: the verification still commits and the miss is logged.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs       - VerificationApi trait
//! application/service.rs - VerificationService (store-backed orchestration)
//! domain/workflow.rs     - review state machine
//! domain/errors.rs       - VerificationError enum
//! ```

pub mod application;
pub mod domain;
pub mod ports;

pub use application::VerificationService;
pub use domain::errors::VerificationError;
pub use ports::inbound::VerificationApi;
