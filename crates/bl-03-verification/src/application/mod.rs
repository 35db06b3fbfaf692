//! Application layer for the verification subsystem.

pub mod service;

pub use service::VerificationService;
