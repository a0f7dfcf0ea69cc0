//! Vehicle service trait and default implementation

use std::sync::Arc;

use super::errors::{ServiceError, ServiceResult};
use crate::store::VehicleRepository;
use crate::vehicle::{SearchQuery, VehicleMap};

/// Operations the HTTP layer can invoke.
pub trait VehicleService: Send + Sync {
    fn find_by_color_and_year(&self, color: &str, fabrication_year: i32)
        -> ServiceResult<VehicleMap>;

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> ServiceResult<VehicleMap>;

    /// Mean max speed across the brand's vehicles.
    ///
    /// Fails with [`ServiceError::NoVehicles`] if the brand has none.
    fn average_max_speed_by_brand(&self, brand: &str) -> ServiceResult<f64>;

    /// Mean passenger capacity across the brand's vehicles, truncated.
    ///
    /// Fails with [`ServiceError::NoVehicles`] if the brand has none.
    fn average_capacity_by_brand(&self, brand: &str) -> ServiceResult<i32>;

    /// Whole store when `has_query` is false, otherwise the inclusive weight
    /// range described by `query`.
    fn search_by_weight_range(&self, query: SearchQuery, has_query: bool)
        -> ServiceResult<VehicleMap>;
}

/// Service backed by a [`VehicleRepository`]
pub struct DefaultVehicleService {
    repository: Arc<dyn VehicleRepository>,
}

impl DefaultVehicleService {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    fn require_brand(&self, brand: &str) -> ServiceResult<VehicleMap> {
        let vehicles = self.repository.find_by_brand(brand)?;
        if vehicles.is_empty() {
            return Err(ServiceError::NoVehicles);
        }
        Ok(vehicles)
    }
}

impl VehicleService for DefaultVehicleService {
    fn find_by_color_and_year(
        &self,
        color: &str,
        fabrication_year: i32,
    ) -> ServiceResult<VehicleMap> {
        Ok(self.repository.find_by_color_and_year(color, fabrication_year)?)
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> ServiceResult<VehicleMap> {
        Ok(self
            .repository
            .find_by_brand_and_year_range(brand, start_year, end_year)?)
    }

    fn average_max_speed_by_brand(&self, brand: &str) -> ServiceResult<f64> {
        let vehicles = self.require_brand(brand)?;

        let total: f64 = vehicles.values().map(|v| v.attributes.max_speed).sum();
        Ok(total / vehicles.len() as f64)
    }

    fn average_capacity_by_brand(&self, brand: &str) -> ServiceResult<i32> {
        let vehicles = self.require_brand(brand)?;

        let total: i64 = vehicles
            .values()
            .map(|v| i64::from(v.attributes.capacity))
            .sum();
        Ok((total / vehicles.len() as i64) as i32)
    }

    fn search_by_weight_range(
        &self,
        query: SearchQuery,
        has_query: bool,
    ) -> ServiceResult<VehicleMap> {
        if !has_query {
            return Ok(self.repository.find_all()?);
        }
        Ok(self.repository.find_by_weight_range(query.from, query.to)?)
    }
}
