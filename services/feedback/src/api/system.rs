//! Health API handler.
//!
//! # Purpose and responsibility
//! Lightweight probe endpoint for load balancers and operators.
//!
//! # Key invariants and assumptions
//! - Health checks must be fast and side-effect free.
use crate::api::error::{ApiError, api_internal};
use crate::api::types::HealthStatus;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses(
        (status = 200, description = "Service health", body = HealthStatus),
        (status = 500, description = "Storage unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Return service health status.
///
/// # What it does
/// Probes the feedback store and reports `ok` along with the backend name.
///
/// # Errors
/// - Returns 500 if the store health check fails.
pub(crate) async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    if let Err(err) = state.store.health_check().await {
        return Err(api_internal("storage unavailable", &err));
    }
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
        backend: state.store.backend_name().to_string(),
        durable: state.store.is_durable(),
    }))
}
