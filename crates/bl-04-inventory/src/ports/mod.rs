//! Ports for the inventory subsystem.

pub mod inbound;
