//! vehicledb - a read-only HTTP query service over an in-memory vehicle
//! catalogue
//!
//! Layers, leaf first:
//! - [`store`]: identifier → record map, linear-scan filters
//! - [`service`]: brand averages and the weight-range composite search
//! - [`http_server`]: axum routes, JSON envelopes, status mapping

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod service;
pub mod store;
pub mod vehicle;
