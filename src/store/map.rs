//! In-memory store backed by a `HashMap`

use std::collections::HashMap;

use super::errors::StoreResult;
use super::repository::VehicleRepository;
use crate::vehicle::{SearchQuery, Vehicle, VehicleMap};

/// Vehicle store over a fixed in-memory map.
///
/// Constructed once from the loaded records and never mutated afterwards,
/// which is what makes sharing it across request handlers lock-free.
#[derive(Debug, Clone, Default)]
pub struct VehicleMapStore {
    db: HashMap<i64, Vehicle>,
}

impl VehicleMapStore {
    /// Creates a store that owns `db`.
    pub fn new(db: HashMap<i64, Vehicle>) -> Self {
        Self { db }
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Linear scan collecting every record that satisfies `predicate`.
    fn scan<F>(&self, predicate: F) -> VehicleMap
    where
        F: Fn(&Vehicle) -> bool,
    {
        self.db
            .iter()
            .filter(|(_, v)| predicate(v))
            .map(|(id, v)| (*id, v.clone()))
            .collect()
    }
}

impl VehicleRepository for VehicleMapStore {
    fn find_all(&self) -> StoreResult<VehicleMap> {
        Ok(self.db.clone())
    }

    fn find_by_color_and_year(
        &self,
        color: &str,
        fabrication_year: i32,
    ) -> StoreResult<VehicleMap> {
        Ok(self.scan(|v| {
            v.attributes.color == color && v.attributes.fabrication_year == fabrication_year
        }))
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> StoreResult<VehicleMap> {
        Ok(self.scan(|v| {
            let year = v.attributes.fabrication_year;
            v.attributes.brand == brand && start_year <= year && year <= end_year
        }))
    }

    fn find_by_brand(&self, brand: &str) -> StoreResult<VehicleMap> {
        Ok(self.scan(|v| v.attributes.brand == brand))
    }

    fn find_by_weight_range(&self, from_weight: f64, to_weight: f64) -> StoreResult<VehicleMap> {
        let query = SearchQuery::new(from_weight, to_weight);
        Ok(self.scan(|v| query.contains(v.attributes.weight)))
    }
}
