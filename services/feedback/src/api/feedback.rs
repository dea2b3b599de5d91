//! Feedback API handlers.
//!
//! # Purpose
//! Accepts feedback submissions and serves them back to the admin dashboard:
//! all records, one record by id, the records for one session, and a rating
//! summary.
//!
//! # Key invariants and assumptions
//! - Submissions are validated before they reach the store; a rejected
//!   submission never consumes an id.
//! - Path parameters are parsed here so malformed ids and session numbers map
//!   to 400 rather than axum's default rejection.
use crate::api::error::{
    ApiError, api_bad_request, api_internal, api_not_found, api_validation_error,
};
use crate::api::types::{FeedbackCreatedResponse, FeedbackSubmission};
use crate::app::AppState;
use crate::model::{Feedback, FeedbackSummary, SessionNumber};
use crate::store::StoreError;
use crate::validation::validate_feedback;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use std::collections::HashMap;

fn parse_session(raw: &str) -> Result<SessionNumber, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| SessionNumber::new(value).ok())
        .ok_or_else(|| api_bad_request("Invalid session number"))
}

fn reject_submission(reason: &'static str) {
    metrics::counter!("feedback_validation_failures_total", "reason" => reason).increment(1);
}

#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = "feedback",
    request_body = FeedbackSubmission,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackCreatedResponse),
        (status = 400, description = "Validation failed", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Unexpected error", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        reject_submission("malformed");
        tracing::debug!(error = %rejection, "malformed feedback body");
        api_bad_request("Invalid JSON body")
    })?;
    let submission = validate_feedback(&body).map_err(|errors| {
        reject_submission("schema");
        tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "feedback failed validation");
        api_validation_error("Validation error", errors)
    })?;

    let feedback = state
        .store
        .create(submission)
        .await
        .map_err(|err| api_internal("failed to store feedback", &err))?;
    metrics::counter!(
        "feedback_submissions_total",
        "session" => feedback.session_number.to_string()
    )
    .increment(1);
    tracing::info!(
        id = feedback.id,
        session = %feedback.session_number,
        rating = feedback.rating,
        "feedback submitted"
    );
    Ok((
        StatusCode::CREATED,
        Json(FeedbackCreatedResponse {
            message: "Feedback submitted successfully".to_string(),
            data: feedback,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = "feedback",
    responses(
        (status = 200, description = "All feedback in submission order", body = [Feedback])
    )
)]
pub(crate) async fn list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let items = state
        .store
        .get_all()
        .await
        .map_err(|err| api_internal("failed to list feedback", &err))?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/feedback/session/{session_number}",
    tag = "feedback",
    params(
        ("session_number" = u8, Path, description = "Workshop session, 1 through 7")
    ),
    responses(
        (status = 200, description = "Feedback for one session", body = [Feedback]),
        (status = 400, description = "Invalid session number", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_session_feedback(
    Path(session_number): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let session = parse_session(&session_number)?;
    let items = state
        .store
        .get_by_session(session)
        .await
        .map_err(|err| api_internal("failed to list session feedback", &err))?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/feedback/{id}",
    tag = "feedback",
    params(
        ("id" = u64, Path, description = "Feedback identifier")
    ),
    responses(
        (status = 200, description = "Fetch feedback", body = Feedback),
        (status = 400, description = "Non-numeric id", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Feedback not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_feedback(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Feedback>, ApiError> {
    let raw = id.trim();
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(api_bad_request("Invalid feedback ID"));
    }
    // Negative or overflowing ids are well-formed numbers that can never exist.
    let Ok(id) = raw.parse::<u64>() else {
        return Err(api_not_found("Feedback not found"));
    };
    match state.store.get_by_id(id).await {
        Ok(feedback) => Ok(Json(feedback)),
        Err(StoreError::NotFound(_)) => Err(api_not_found("Feedback not found")),
        Err(err) => Err(api_internal("failed to load feedback", &err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/feedback/summary",
    tag = "feedback",
    params(
        ("session" = Option<u8>, Query, description = "Restrict the summary to one session")
    ),
    responses(
        (status = 200, description = "Rating summary", body = FeedbackSummary),
        (status = 400, description = "Invalid session number", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn feedback_summary(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<FeedbackSummary>, ApiError> {
    let session = params
        .get("session")
        .map(|raw| parse_session(raw))
        .transpose()?;
    let summary = state
        .store
        .summary(session)
        .await
        .map_err(|err| api_internal("failed to summarize feedback", &err))?;
    Ok(Json(summary))
}
