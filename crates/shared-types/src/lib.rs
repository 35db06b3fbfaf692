//! # Shared Types Crate
//!
//! This crate contains all domain entities shared across the BloodLink
//! subsystems: blood groups, the role-tagged user union, blood requests,
//! donation records, inventory items, and verification requests.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Tagged User Union**: A user is exactly one of receiver, donor, or
//!   organization; every role branch matches exhaustively.
//! - **Derived State Stays Derived**: Cooldown is a timestamp pair on the
//!   donor (never a stored boolean), and inventory stock level is recomputed
//!   from the unit count on every write.

pub mod cities;
pub mod entities;
pub mod ids;

pub use cities::CITIES;
pub use entities::*;
pub use ids::*;
