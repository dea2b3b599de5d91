//! Feedback service HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and the JSON fallback for unknown `/api`
//! paths.
pub mod contact;
pub mod error;
pub mod feedback;
pub mod openapi;
pub mod sessions;
pub mod system;
pub mod types;

use crate::api::error::{ApiError, api_not_found};

/// Unknown API paths answer with a JSON 404 instead of the static bundle.
pub(crate) async fn api_fallback() -> ApiError {
    api_not_found("Route not found")
}
