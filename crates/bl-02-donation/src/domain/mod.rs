//! Donation lifecycle domain: state machine, cooldown, errors.

pub mod cooldown;
pub mod errors;
pub mod lifecycle;
pub mod value_objects;
