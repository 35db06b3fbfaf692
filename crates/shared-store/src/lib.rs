//! # Shared Store - Record Store Port
//!
//! The abstract persistence boundary every subsystem writes through.
//!
//! ## Architecture Rules
//!
//! - Subsystems never touch ambient global state: every read and write goes
//!   through an injected [`RecordStore`], so any backend (in-memory, file,
//!   database) can be substituted, in tests and in production alike.
//! - `save` is an upsert by record identity. The last writer wins; there is
//!   no version check or optimistic lock. Two donors racing to accept the
//!   same request is resolved by whichever save lands last - a documented
//!   property of the design, and the extension point for anyone wanting
//!   stronger guarantees.
//! - Records are serialized losslessly; the reference adapter keeps them as
//!   JSON documents.

pub mod memory;
pub mod queries;
pub mod record;
pub mod store;

pub use memory::InMemoryStore;
pub use record::StoreRecord;
pub use store::{RecordStore, StoreError};
