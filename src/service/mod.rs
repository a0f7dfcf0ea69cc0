//! Vehicle query service
//!
//! Sits between the HTTP adapter and the record store. Filters are forwarded
//! to the store unchanged; the service adds the brand averages and the
//! weight-range composite search.

mod errors;
pub mod mock;
mod vehicle;

pub use errors::{ServiceError, ServiceResult};
pub use vehicle::{DefaultVehicleService, VehicleService};
