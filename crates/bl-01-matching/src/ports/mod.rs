//! Ports for the matching subsystem.

pub mod inbound;
