//! Service error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// An aggregation found no vehicles to reduce over
    #[error("no vehicles found")]
    NoVehicles,

    /// Opaque fault from the store, passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// True for the recoverable no-data condition
    pub fn is_no_vehicles(&self) -> bool {
        matches!(self, ServiceError::NoVehicles)
    }
}
