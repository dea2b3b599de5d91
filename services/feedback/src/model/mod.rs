//! Feedback data model.
//!
//! # Purpose
//! Re-exports the feedback record, the fixed workshop session catalog, and the
//! summary payload shared by the store and HTTP API layers.
mod feedback;
mod session;
mod summary;

pub use feedback::{Feedback, NewFeedback, RATING_MAX, RATING_MIN};
pub use session::{InvalidSessionNumber, SessionNumber, WorkshopSession, catalog};
pub use summary::{FeedbackSummary, RatingCount};
