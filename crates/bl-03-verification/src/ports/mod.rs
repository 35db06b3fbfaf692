//! Ports for the verification subsystem.

pub mod inbound;
