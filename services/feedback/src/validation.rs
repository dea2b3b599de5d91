//! Field-level validation of client submissions.
//!
//! # Purpose
//! Turns an untyped JSON body into a normalized creation value, or into the
//! full list of violated field constraints so the client can show a message
//! next to each form field.
//!
//! # Key invariants and assumptions
//! - Constraints match the browser form: name has at least 2 characters,
//!   email is well formed, session is 1..=7, rating is 1..=5.
//! - Checks are structural only. There are no cross-field or business rules.
//! - Every failing field is reported, not just the first.
use crate::contact::ContactMessage;
use crate::model::{NewFeedback, RATING_MAX, RATING_MIN, SessionNumber};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;
use utoipa::ToSchema;

const NAME_MIN_CHARS: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email regex")
});

/// One violated constraint on one input field.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|err| err.field.as_str())
    }
}

/// Collects errors while individual fields are checked.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn required_string<'a>(&mut self, body: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, format!("{field} is required"));
                None
            }
            Some(Value::String(value)) => Some(value.as_str()),
            Some(_) => {
                self.fail(field, format!("{field} must be a string"));
                None
            }
        }
    }

    fn required_integer(&mut self, body: &Map<String, Value>, field: &str) -> Option<i64> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, format!("{field} is required"));
                None
            }
            Some(value) => match value.as_i64().or_else(|| whole_float(value)) {
                Some(number) => Some(number),
                None => {
                    self.fail(field, format!("{field} must be an integer"));
                    None
                }
            },
        }
    }

    /// Optional free text. Empty strings are normalized to `None`.
    fn optional_text(&mut self, body: &Map<String, Value>, field: &str) -> Option<String> {
        match body.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) if value.is_empty() => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => {
                self.fail(field, format!("{field} must be a string"));
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationErrors {
                errors: self.errors,
            }),
        }
    }
}

/// `5.0` counts as an integer; `4.5` does not.
fn whole_float(value: &Value) -> Option<i64> {
    let number = value.as_f64()?;
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.fract() == 0.0 && in_range).then_some(number as i64)
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.as_object().ok_or_else(|| ValidationErrors {
        errors: vec![FieldError::new("body", "request body must be a JSON object")],
    })
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Validate a feedback submission.
///
/// # Errors
/// Returns every violated field constraint. A non-object body yields a single
/// error on field `body`.
pub fn validate_feedback(body: &Value) -> Result<NewFeedback, ValidationErrors> {
    let body = as_object(body)?;
    let mut checker = Checker::default();

    let name = checker.required_string(body, "name").and_then(|name| {
        if name.chars().count() < NAME_MIN_CHARS {
            checker.fail("name", "Name must be at least 2 characters");
            None
        } else {
            Some(name.to_string())
        }
    });

    let email = checker.required_string(body, "email").and_then(|email| {
        if is_valid_email(email) {
            Some(email.to_string())
        } else {
            checker.fail("email", "Please enter a valid email address");
            None
        }
    });

    let session_number = checker
        .required_integer(body, "sessionNumber")
        .and_then(|value| match SessionNumber::new(value) {
            Ok(session) => Some(session),
            Err(_) => {
                checker.fail(
                    "sessionNumber",
                    format!(
                        "Session number must be between {} and {}",
                        SessionNumber::MIN,
                        SessionNumber::MAX
                    ),
                );
                None
            }
        });

    let rating = checker
        .required_integer(body, "rating")
        .and_then(|value| {
            if (i64::from(RATING_MIN)..=i64::from(RATING_MAX)).contains(&value) {
                Some(value as u8)
            } else {
                checker.fail(
                    "rating",
                    format!("Rating must be between {RATING_MIN} and {RATING_MAX}"),
                );
                None
            }
        });

    let comments = checker.optional_text(body, "comments");
    let suggestions = checker.optional_text(body, "suggestions");

    let feedback = match (name, email, session_number, rating) {
        (Some(name), Some(email), Some(session_number), Some(rating)) => Some(NewFeedback {
            name,
            email,
            session_number,
            rating,
            comments,
            suggestions,
        }),
        _ => None,
    };
    checker.finish(feedback)
}

/// Validate a contact-form message. Fields only need to be present and
/// non-empty.
///
/// # Errors
/// Returns one error per missing, empty, or non-string field.
pub fn validate_contact(body: &Value) -> Result<ContactMessage, ValidationErrors> {
    let body = as_object(body)?;
    let mut checker = Checker::default();
    let mut present = |field: &str| {
        checker.required_string(body, field).and_then(|value| {
            if value.is_empty() {
                checker.fail(field, format!("{field} is required"));
                None
            } else {
                Some(value.to_string())
            }
        })
    };
    let name = present("name");
    let email = present("email");
    let message = present("message");

    let contact = match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Some(ContactMessage {
            name,
            email,
            message,
        }),
        _ => None,
    };
    checker.finish(contact)
}
