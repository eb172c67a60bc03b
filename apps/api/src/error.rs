//! # API Error Type
//!
//! Every failure a handler can produce, and the exact JSON envelope each one
//! turns into.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Tienda API                         │
//! │                                                                         │
//! │  probe (SELECT 1) fails ────────────► Unavailable  ──► 503             │
//! │    { error: "Error de conexión...", message: "Servicio temporal..." }   │
//! │                                                                         │
//! │  body missing / ill-typed / invalid ► BadRequest   ──► 400             │
//! │    { error: "Solicitud inválida", details: <reason> }                   │
//! │                                                                         │
//! │  statement rejected ────────────────► Execution    ──► 500             │
//! │    { error: <operation summary>, details: <db message | redacted> }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The raw driver text of a probe failure never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::config::ErrorDetail;
use tienda_db::DbError;

pub const UNAVAILABLE_ERROR: &str = "Error de conexión a la base de datos";
pub const UNAVAILABLE_MESSAGE: &str = "Servicio temporalmente no disponible. Intente más tarde.";
pub const BAD_REQUEST_ERROR: &str = "Solicitud inválida";
pub const REDACTED_DETAILS: &str = "Internal database error";

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The liveness probe failed.
    #[error("Error de conexión a la base de datos")]
    Unavailable,

    /// The request body was rejected before any SQL ran.
    #[error("Solicitud inválida: {0}")]
    BadRequest(String),

    /// The statement failed after a successful probe.
    #[error("{summary}: {details}")]
    Execution {
        summary: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Builds an execution error, logging the raw database error.
    ///
    /// `summary` is the fixed per-operation string sent as `error`.
    pub fn execution(summary: &'static str, err: DbError, detail: ErrorDetail) -> Self {
        error!(operation = summary, error = %err, "Statement failed");

        let details = match detail {
            ErrorDetail::Verbose => err.details(),
            ErrorDetail::Redacted => REDACTED_DETAILS.to_string(),
        };

        ApiError::Execution { summary, details }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Execution { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `503` body.
#[derive(Debug, Serialize)]
struct UnavailableBody {
    error: &'static str,
    message: &'static str,
}

/// `400` / `500` body.
#[derive(Debug, Serialize)]
struct FailureBody {
    error: &'static str,
    details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Unavailable => (
                status,
                Json(UnavailableBody {
                    error: UNAVAILABLE_ERROR,
                    message: UNAVAILABLE_MESSAGE,
                }),
            )
                .into_response(),
            ApiError::BadRequest(details) => (
                status,
                Json(FailureBody {
                    error: BAD_REQUEST_ERROR,
                    details,
                }),
            )
                .into_response(),
            ApiError::Execution { summary, details } => (
                status,
                Json(FailureBody {
                    error: summary,
                    details,
                }),
            )
                .into_response(),
        }
    }
}
