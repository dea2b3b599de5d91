//! OpenAPI schema aggregation for the feedback API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document served
//! at `/api/openapi.json`.
use crate::api::types::{
    ErrorResponse, FeedbackCreatedResponse, FeedbackSubmission, HealthStatus, MessageResponse,
};
use crate::api::{contact, feedback, sessions, system};
use crate::contact::ContactMessage;
use crate::model::{Feedback, FeedbackSummary, RatingCount, SessionNumber, WorkshopSession};
use crate::validation::FieldError;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "workshop-feedback",
        version = "v1",
        description = "Sales-coaching workshop feedback and contact API"
    ),
    paths(
        system::health,
        sessions::list_sessions,
        contact::submit_contact,
        feedback::create_feedback,
        feedback::list_feedback,
        feedback::feedback_summary,
        feedback::list_session_feedback,
        feedback::get_feedback
    ),
    components(schemas(
        ErrorResponse,
        FieldError,
        MessageResponse,
        HealthStatus,
        ContactMessage,
        FeedbackSubmission,
        FeedbackCreatedResponse,
        Feedback,
        FeedbackSummary,
        RatingCount,
        SessionNumber,
        WorkshopSession
    )),
    tags(
        (name = "system", description = "Health probes"),
        (name = "sessions", description = "Workshop session catalog"),
        (name = "contact", description = "Contact form"),
        (name = "feedback", description = "Session feedback")
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/api/health",
            "/api/sessions",
            "/api/contact",
            "/api/feedback",
            "/api/feedback/summary",
            "/api/feedback/session/{session_number}",
            "/api/feedback/{id}",
        ] {
            assert!(paths.iter().any(|path| path == expected), "missing {expected}");
        }
    }
}
