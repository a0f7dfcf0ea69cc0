//! Vehicle HTTP Routes
//!
//! Read-only query endpoints over the vehicle store. Path and query
//! parameters are parsed here; the service only ever sees typed arguments.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use crate::service::VehicleService;
use crate::vehicle::{SearchQuery, VehicleMap};

// ==================
// Shared State
// ==================

/// Vehicle state shared across handlers
pub struct VehicleState {
    pub service: Arc<dyn VehicleService>,
}

impl VehicleState {
    pub fn new(service: Arc<dyn VehicleService>) -> Self {
        Self { service }
    }
}

// ==================
// Request/Response Types
// ==================

/// Success envelope: `{"message": .., "data": ..}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}

/// Raw weight bounds; both or neither must be present
#[derive(Debug, Default, Deserialize)]
pub struct WeightRangeQuery {
    #[serde(default)]
    pub weight_min: Option<String>,
    #[serde(default)]
    pub weight_max: Option<String>,
}

impl WeightRangeQuery {
    /// Resolve into a search query plus the "bounds supplied" flag.
    pub fn resolve(&self) -> ApiResult<(SearchQuery, bool)> {
        if self.weight_min.is_none() && self.weight_max.is_none() {
            return Ok((SearchQuery::default(), false));
        }

        let from = parse_weight(self.weight_min.as_deref(), "weight_min")?;
        let to = parse_weight(self.weight_max.as_deref(), "weight_max")?;
        Ok((SearchQuery::new(from, to), true))
    }
}

const VEHICLES_FOUND: &str = "vehicles found";

// ==================
// Vehicle Routes
// ==================

/// Create vehicle routes
pub fn vehicle_routes(state: Arc<VehicleState>) -> Router {
    Router::new()
        .route("/", get(list_vehicles_handler))
        .route("/color/:color/year/:year", get(find_by_color_and_year_handler))
        .route(
            "/brand/:brand/between/:start_year/:end_year",
            get(find_by_brand_and_year_range_handler),
        )
        .route(
            "/average_speed/brand/:brand",
            get(average_max_speed_by_brand_handler),
        )
        .route(
            "/average_capacity/brand/:brand",
            get(average_capacity_by_brand_handler),
        )
        .route("/weight", get(search_by_weight_range_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_param<T: FromStr>(raw: &str, name: &str) -> ApiResult<T> {
    raw.parse().map_err(|_| ApiError::invalid_param(name))
}

fn parse_weight(raw: Option<&str>, name: &str) -> ApiResult<f64> {
    let value: f64 = parse_param(raw.ok_or_else(|| ApiError::invalid_param(name))?, name)?;
    if value.is_nan() {
        return Err(ApiError::invalid_param(name));
    }
    Ok(value)
}

// ==================
// Handlers
// ==================

async fn list_vehicles_handler(
    State(state): State<Arc<VehicleState>>,
) -> ApiResult<Json<DataResponse<VehicleMap>>> {
    let vehicles = state
        .service
        .search_by_weight_range(SearchQuery::default(), false)?;
    Ok(Json(DataResponse::new(VEHICLES_FOUND, vehicles)))
}

async fn find_by_color_and_year_handler(
    State(state): State<Arc<VehicleState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<DataResponse<VehicleMap>>> {
    let Path((color, year)) = path?;
    let year: i32 = parse_param(&year, "year")?;

    let vehicles = state.service.find_by_color_and_year(&color, year)?;
    Ok(Json(DataResponse::new(VEHICLES_FOUND, vehicles)))
}

async fn find_by_brand_and_year_range_handler(
    State(state): State<Arc<VehicleState>>,
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> ApiResult<Json<DataResponse<VehicleMap>>> {
    let Path((brand, start_year, end_year)) = path?;
    let start_year: i32 = parse_param(&start_year, "start_year")?;
    let end_year: i32 = parse_param(&end_year, "end_year")?;

    let vehicles = state
        .service
        .find_by_brand_and_year_range(&brand, start_year, end_year)?;
    Ok(Json(DataResponse::new(VEHICLES_FOUND, vehicles)))
}

async fn average_max_speed_by_brand_handler(
    State(state): State<Arc<VehicleState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DataResponse<f64>>> {
    let Path(brand) = path?;
    let average = state.service.average_max_speed_by_brand(&brand)?;
    Ok(Json(DataResponse::new("average max speed found", average)))
}

async fn average_capacity_by_brand_handler(
    State(state): State<Arc<VehicleState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DataResponse<i32>>> {
    let Path(brand) = path?;
    let average = state.service.average_capacity_by_brand(&brand)?;
    Ok(Json(DataResponse::new("average capacity found", average)))
}

async fn search_by_weight_range_handler(
    State(state): State<Arc<VehicleState>>,
    query: Result<Query<WeightRangeQuery>, QueryRejection>,
) -> ApiResult<Json<DataResponse<VehicleMap>>> {
    let Query(query) = query?;
    let (search, has_query) = query.resolve()?;

    let vehicles = state.service.search_by_weight_range(search, has_query)?;
    Ok(Json(DataResponse::new(VEHICLES_FOUND, vehicles)))
}
