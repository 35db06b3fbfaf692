//! Application layer for the matching subsystem.

pub mod service;

pub use service::MatchingService;
