//! Cross-subsystem integration flows.

pub mod flows;
