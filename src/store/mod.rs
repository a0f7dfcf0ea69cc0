//! Record store for vehicledb
//!
//! The store is an in-memory mapping of identifier to vehicle record. It is
//! populated once at start-up (see [`VehicleLoader`]) and only read after
//! that, so every query is a linear scan that builds a fresh result map.
//!
//! # Operations
//!
//! - `find_all` - the whole store
//! - `find_by_color_and_year` - exact color and fabrication year
//! - `find_by_brand_and_year_range` - exact brand, inclusive year range
//! - `find_by_brand` - exact brand
//! - `find_by_weight_range` - inclusive weight range

mod errors;
mod loader;
mod map;
pub mod mock;
mod repository;

pub use errors::{LoadError, LoadResult, StoreError, StoreResult};
pub use loader::VehicleLoader;
pub use map::VehicleMapStore;
pub use repository::VehicleRepository;
