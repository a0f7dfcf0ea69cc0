//! # vehicledb HTTP Server Module
//!
//! Adapts HTTP requests onto the vehicle service and renders JSON.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/vehicles` - Whole catalogue
//! - `/vehicles/color/:color/year/:year`
//! - `/vehicles/brand/:brand/between/:start_year/:end_year`
//! - `/vehicles/average_speed/brand/:brand`
//! - `/vehicles/average_capacity/brand/:brand`
//! - `/vehicles/weight?weight_min=..&weight_max=..`

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod vehicle_routes;

pub use config::{ConfigError, ConfigResult, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
