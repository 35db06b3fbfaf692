//! # BloodLink Test Suite
//!
//! Unified test crate containing cross-subsystem integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem flows over one shared store
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bl-tests
//!
//! # By category
//! cargo test -p bl-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
