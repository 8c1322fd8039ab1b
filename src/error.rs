//! Error types for the weather gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message used when the provider gives no usable error text
pub const GENERIC_UPSTREAM_MESSAGE: &str = "Failed to fetch weather data";

// == Gateway Error Enum ==
/// Unified error type for the weather gateway.
///
/// Timeouts, 4xx and 5xx all land in the same variant; only the attached
/// status and message tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The upstream provider request failed
    #[error("{message}")]
    Upstream {
        /// Upstream HTTP status, absent for transport or decode failures
        status: Option<u16>,
        /// Human-readable message, taken from the provider payload when present
        message: String,
    },
}

impl GatewayError {
    /// Builds an upstream failure carrying the provider's status and message.
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Builds an upstream failure with no status and the generic message.
    pub fn generic() -> Self {
        Self::upstream(None, GENERIC_UPSTREAM_MESSAGE)
    }

    /// Upstream status code, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Upstream { status, .. } => *status,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GatewayError::Upstream { message, .. } => message,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self
            .status()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::new(self.message()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

// == API Error Enum ==
/// Everything an HTTP handler can fail with.
///
/// Extractor rejections keep axum's status and text but are rendered with the
/// same `{ "error": ... }` body as upstream failures.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The request itself could not be read (bad path segment, malformed query)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Gateway(err) => err.into_response(),
            ApiError::Rejected { status, message } => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
        }
    }
}

/// Result type returned by HTTP handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
