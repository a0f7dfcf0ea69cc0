//! Vehicle domain types
//!
//! A vehicle record is an immutable value: an identifier plus an attribute
//! bundle. Nothing in this module validates field contents.

mod types;

pub use types::{Dimensions, SearchQuery, Vehicle, VehicleAttributes, VehicleMap};
