//! Store access trait

use super::errors::StoreResult;
use crate::vehicle::VehicleMap;

/// Read-only access to the vehicle records.
///
/// Implementations must never hand out a view into their own storage: every
/// call returns a freshly built map, empty when nothing matches.
pub trait VehicleRepository: Send + Sync {
    /// Every record in the store
    fn find_all(&self) -> StoreResult<VehicleMap>;

    /// Records whose color and fabrication year both match exactly
    fn find_by_color_and_year(&self, color: &str, fabrication_year: i32)
        -> StoreResult<VehicleMap>;

    /// Records of `brand` fabricated in `start_year..=end_year`
    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> StoreResult<VehicleMap>;

    /// Records whose brand matches exactly
    fn find_by_brand(&self, brand: &str) -> StoreResult<VehicleMap>;

    /// Records weighing within `from_weight..=to_weight`
    fn find_by_weight_range(&self, from_weight: f64, to_weight: f64) -> StoreResult<VehicleMap>;
}
