//! Application layer for the donation lifecycle subsystem.

pub mod service;

pub use service::DonationService;
