//! Verification domain: the review state machine.

pub mod errors;
pub mod workflow;
