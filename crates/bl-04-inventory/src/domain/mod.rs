//! Inventory domain: stock classification.

pub mod errors;
pub mod stock;
