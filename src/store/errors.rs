//! Store and loader error types

use std::io;

use thiserror::Error;

/// Result type for store queries
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for data bootstrap
pub type LoadResult<T> = Result<T, LoadError>;

/// Faults surfaced by a store implementation.
///
/// The in-memory store never produces one; the variant exists so other
/// implementations can report an opaque failure.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("store failure: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Errors raised while loading the vehicle data file
#[derive(Debug, Error)]
pub enum LoadError {
    /// Data file missing or unreadable
    #[error("failed to read vehicle data: {0}")]
    Io(#[from] io::Error),

    /// Data file is not a valid vehicle array
    #[error("invalid vehicle data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same identifier
    #[error("duplicate vehicle id: {0}")]
    DuplicateId(i64),
}
