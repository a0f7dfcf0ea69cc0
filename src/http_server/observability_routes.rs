//! Observability HTTP Routes
//!
//! Health check plus the per-request logging middleware.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::observability::{Event, Logger};

/// Header carrying the request id back to the client
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Records held by the store
    pub vehicles: usize,
}

/// Health check route
pub fn health_routes(vehicle_count: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(vehicle_count)
}

async fn health_handler(State(vehicle_count): State<usize>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        vehicles: vehicle_count,
    };

    (StatusCode::OK, Json(response))
}

/// Logs one `HTTP_REQUEST` line per request and tags the response with a
/// fresh request id.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let latency_ms = started.elapsed().as_millis().to_string();
    Logger::event(
        Event::HttpRequest,
        &[
            ("latency_ms", latency_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status.as_str()),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
