//! # HTTP Server
//!
//! Combines the vehicle and health routers into one axum server.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::ServerConfig;
use super::observability_routes::{health_routes, log_requests};
use super::vehicle_routes::{vehicle_routes, VehicleState};
use crate::observability::{Event, Logger};
use crate::service::VehicleService;

/// HTTP server for the vehicle query API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `service`.
    ///
    /// `vehicle_count` is only reported by `/health`.
    pub fn new(config: ServerConfig, service: Arc<dyn VehicleService>, vehicle_count: usize) -> Self {
        let router = Self::build_router(&config, service, vehicle_count);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &ServerConfig,
        service: Arc<dyn VehicleService>,
        vehicle_count: usize,
    ) -> Router {
        let vehicle_state = Arc::new(VehicleState::new(service));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(vehicle_count))
            .nest("/vehicles", vehicle_routes(vehicle_state))
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let addr_str = addr.to_string();
        Logger::event(Event::ServerStart, &[("addr", addr_str.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::event(Event::ServerStop, &[("addr", addr_str.as_str())]);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        let err = e.to_string();
        Logger::warn("SIGNAL_HANDLER_FAILED", &[("error", err.as_str())]);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::DefaultVehicleService;
    use crate::store::VehicleMapStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn empty_service() -> Arc<dyn VehicleService> {
        Arc::new(DefaultVehicleService::new(Arc::new(VehicleMapStore::default())))
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(ServerConfig::with_port(9000), empty_service(), 0);
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[tokio::test]
    async fn test_routes_are_mounted() {
        let router = HttpServer::new(ServerConfig::default(), empty_service(), 0).router();

        let health = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let missing = router
            .oneshot(
                Request::get("/vehicles/average_speed/brand/Nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let router = HttpServer::new(ServerConfig::default(), empty_service(), 0).router();

        let response = router
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
