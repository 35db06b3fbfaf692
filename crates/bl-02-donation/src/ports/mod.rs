//! Ports for the donation lifecycle subsystem.

pub mod inbound;
