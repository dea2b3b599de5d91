//! HTTP API request/response types.
//!
//! # Purpose
//! Defines payload shapes for the feedback REST API and OpenAPI schema
//! generation. Field names follow the browser client (camelCase).
use crate::model::Feedback;
use crate::validation::FieldError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FeedbackCreatedResponse {
    pub message: String,
    pub data: Feedback,
}

/// Feedback submission as sent by the form. Documentation only: handlers
/// validate the raw JSON so every field error can be reported.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub session_number: u8,
    pub rating: u8,
    pub comments: Option<String>,
    pub suggestions: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
    pub durable: bool,
}
