//! Matching error types.

use shared_store::StoreError;
use thiserror::Error;

/// Matching subsystem failure.
#[derive(Debug, Error)]
pub enum MatchingError {
    /// The request pool could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),
}
