//! Matching domain: the compatibility table and the candidate engine.

pub mod compatibility;
pub mod engine;
pub mod errors;
