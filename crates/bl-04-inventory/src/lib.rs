//! # Inventory Subsystem
//!
//! **Subsystem ID:** 4
//!
//! ## Purpose
//!
//! Tracks each organization's blood stock and derives a stock-level
//! category from the raw unit count.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One logical item per (organization, blood group) | `application/service.rs` upsert |
//! | Stock level is a pure function of units | `domain/stock.rs`, recomputed on every write |
//! | Units bounded to 0..=1000 | `application/service.rs` validation |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs       - InventoryApi trait
//! application/service.rs - InventoryService (store-backed orchestration)
//! domain/stock.rs        - classify(units) -> StockLevel
//! domain/errors.rs       - InventoryError enum
//! ```

pub mod application;
pub mod domain;
pub mod ports;

pub use application::InventoryService;
pub use domain::errors::InventoryError;
pub use domain::stock::classify;
pub use ports::inbound::InventoryApi;
