//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint answers
//! failures with the same JSON shape: `{ code, message, errors? }`.
//!
//! # Key invariants and assumptions
//! - `message` is safe to show to an end user.
//! - `errors` is only present for validation failures and carries one entry
//!   per violated field constraint.
//! - Internal errors log details server-side and return a generic message.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use crate::validation::ValidationErrors;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Structured API error returned by handlers.
///
/// # Invariants
/// - `status` must match the semantics of `body.code`.
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

fn error(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            errors: None,
        },
    }
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    error(StatusCode::NOT_FOUND, "not_found", message)
}

/// Build a 400 Bad Request error for malformed path, query, or body input.
pub fn api_bad_request(message: &str) -> ApiError {
    error(StatusCode::BAD_REQUEST, "bad_request", message)
}

/// Build a 400 Bad Request error carrying per-field validation failures.
///
/// # What it does
/// Copies every field error into the response so the client can show a
/// message beside each form field.
pub fn api_validation_error(message: &str, errors: ValidationErrors) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse {
            code: "validation_error".to_string(),
            message: message.to_string(),
            errors: Some(errors.errors),
        },
    }
}

/// Build a 500 Internal Server Error from a store error.
///
/// # What it does
/// Logs `context` and the store error, then returns the generic internal
/// error message.
pub fn api_internal(context: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, context, "feedback storage error");
    api_internal_message(context)
}

/// Build a 500 Internal Server Error without a store error.
pub fn api_internal_message(context: &str) -> ApiError {
    tracing::error!(context, "internal error");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal",
        INTERNAL_ERROR_MESSAGE,
    )
}
