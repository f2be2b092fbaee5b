//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint fails with
//! the same `{"error": "..."}` body.
//!
//! # Key invariants and assumptions
//! - The status code always matches the failure category.
//! - Internal errors log details server-side but return a generic message.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use crate::validation::ValidationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// # Example
/// ```rust
/// use axum::http::StatusCode;
/// use zoo_registry::api::error::ApiError;
/// use zoo_registry::api::types::ErrorResponse;
///
/// let err = ApiError {
///     status: StatusCode::NOT_FOUND,
///     body: ErrorResponse {
///         error: "Animal não encontrado".to_string(),
///     },
/// };
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        api_validation_error(err.message())
    }
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        body: ErrorResponse {
            error: message.to_string(),
        },
    }
}

/// Build a 400 Bad Request validation error.
pub fn api_validation_error(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse {
            error: message.to_string(),
        },
    }
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error and returns a generic internal error response.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "registry storage error");
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            error: message.to_string(),
        },
    }
}

/// Map a store lookup failure: `NotFound` becomes a 404 with `not_found`,
/// anything else a 500 with `internal`.
pub fn api_store_error(err: StoreError, not_found: &str, internal: &str) -> ApiError {
    match err {
        StoreError::NotFound(_) => api_not_found(not_found),
        err => api_internal(internal, &err),
    }
}
