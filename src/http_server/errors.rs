//! HTTP error mapping
//!
//! Every handler error renders as `{"status": <reason>, "message": <msg>}`.
//! Internal details are logged, never sent to the client.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{Event, Logger};
use crate::service::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the vehicle routes
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// A path or query parameter failed to parse
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; the detail stays server-side
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// `invalid <param>` bad request
    pub fn invalid_param(name: &str) -> Self {
        ApiError::BadRequest(format!("invalid {}", name))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    pub fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Internal(_) => "internal error".to_string(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_no_vehicles() {
            ApiError::NotFound("vehicles not found".to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("invalid path: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("invalid query: {}", rejection.body_text()))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            status: err
                .status_code()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: err.public_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            Logger::event(Event::HttpInternalError, &[("error", detail.as_str())]);
        }
        let body = Json(ErrorResponse::from(&self));
        (self.status_code(), body).into_response()
    }
}
