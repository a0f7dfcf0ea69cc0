//! Vehicle record, dimensions and search query types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result collection: identifier → record.
///
/// Every query builds a fresh map. Iteration order carries no meaning.
pub type VehicleMap = HashMap<i64, Vehicle>;

/// Physical dimensions of a vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Attribute bundle carried by every vehicle record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleAttributes {
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    /// Passenger capacity
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    #[serde(flatten)]
    pub dimensions: Dimensions,
}

/// A single vehicle record.
///
/// Serializes flat: `{"Id":1,"Brand":"..",...,"Height":..,"Length":..,"Width":..}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vehicle {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: VehicleAttributes,
}

impl Vehicle {
    /// Create a record from its identifier and attributes
    pub fn new(id: i64, attributes: VehicleAttributes) -> Self {
        Self { id, attributes }
    }
}

/// Weight range filter used by the composite search.
///
/// Whether the bounds apply at all is decided by the caller's `has_query`
/// flag, not by this value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchQuery {
    pub from: f64,
    pub to: f64,
}

impl SearchQuery {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Inclusive on both ends
    pub fn contains(&self, weight: f64) -> bool {
        self.from <= weight && weight <= self.to
    }
}
