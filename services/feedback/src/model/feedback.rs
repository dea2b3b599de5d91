//! Feedback record definitions.
//!
//! # Purpose
//! Defines the stored feedback record and the validated input used to create
//! one. Records are immutable once the store hands them out.
use super::SessionNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// A participant's rating and comments for one workshop session.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub session_number: SessionNumber,
    pub rating: u8,
    pub comments: Option<String>,
    pub suggestions: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Validated, normalized input for `FeedbackStore::create`.
///
/// Only `validation::validate_feedback` builds these from client input, so
/// every field is already within range.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub session_number: SessionNumber,
    pub rating: u8,
    pub comments: Option<String>,
    pub suggestions: Option<String>,
}

impl NewFeedback {
    pub fn into_feedback(self, id: u64, created_at: DateTime<Utc>) -> Feedback {
        Feedback {
            id,
            name: self.name,
            email: self.email,
            session_number: self.session_number,
            rating: self.rating,
            comments: self.comments,
            suggestions: self.suggestions,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_serializes_camel_case_with_null_optionals() {
        let feedback = NewFeedback {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            session_number: SessionNumber::new(3).expect("session"),
            rating: 5,
            comments: None,
            suggestions: Some("more role play".to_string()),
        }
        .into_feedback(1, Utc::now());

        let value = serde_json::to_value(&feedback).expect("json");
        assert_eq!(value["id"], 1);
        assert_eq!(value["sessionNumber"], 3);
        assert_eq!(value["rating"], 5);
        assert!(value["comments"].is_null());
        assert_eq!(value["suggestions"], "more role play");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn feedback_deserializes_from_api_payload() {
        let value = serde_json::json!({
            "id": 7,
            "name": "Sam",
            "email": "sam@example.com",
            "sessionNumber": 2,
            "rating": 4,
            "comments": null,
            "suggestions": null,
            "createdAt": "2026-10-19T09:30:00Z"
        });
        let feedback: Feedback = serde_json::from_value(value).expect("feedback");
        assert_eq!(feedback.id, 7);
        assert_eq!(feedback.session_number.get(), 2);
        assert!(feedback.comments.is_none());
    }

    #[test]
    fn feedback_rejects_out_of_range_session_on_deserialize() {
        let value = serde_json::json!({
            "id": 7,
            "name": "Sam",
            "email": "sam@example.com",
            "sessionNumber": 8,
            "rating": 4,
            "comments": null,
            "suggestions": null,
            "createdAt": "2026-10-19T09:30:00Z"
        });
        assert!(serde_json::from_value::<Feedback>(value).is_err());
    }
}
