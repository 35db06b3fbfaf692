//! Application layer for the inventory subsystem.

pub mod service;

pub use service::InventoryService;
