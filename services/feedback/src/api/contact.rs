//! Contact form handler.
//!
//! # Purpose
//! Checks that name, email, and message are present and hands the message to
//! the configured `ContactNotifier`. Nothing is persisted.
use crate::api::error::{ApiError, api_bad_request, api_internal_message};
use crate::api::types::MessageResponse;
use crate::app::AppState;
use crate::contact::ContactMessage;
use crate::validation::validate_contact;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::Value;

const MISSING_FIELDS: &str = "All fields are required";

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message accepted", body = MessageResponse),
        (status = 400, description = "A field is missing or empty", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Unexpected error", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "malformed contact body");
        api_bad_request(MISSING_FIELDS)
    })?;
    let message = validate_contact(&body).map_err(|errors| {
        let mut err = api_bad_request(MISSING_FIELDS);
        err.body.errors = Some(errors.errors);
        err
    })?;

    if let Err(err) = state.notifier.notify(&message).await {
        tracing::error!(
            error = ?err,
            notifier = state.notifier.notifier_name(),
            "contact notifier failed"
        );
        return Err(api_internal_message("failed to deliver contact message"));
    }
    metrics::counter!("contact_messages_total").increment(1);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Message received successfully".to_string(),
        }),
    ))
}
