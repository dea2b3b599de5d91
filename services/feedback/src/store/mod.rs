//! Feedback storage abstraction.
//!
//! # Purpose
//! Defines the `FeedbackStore` trait implemented by storage backends and the
//! error type handlers map onto HTTP responses.
use crate::model::{Feedback, FeedbackSummary, NewFeedback, SessionNumber};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Append-only feedback storage.
///
/// Records are never updated or deleted. Ids start at 1, increase with every
/// `create`, and are never reused. Listing operations return records in
/// insertion order.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn create(&self, feedback: NewFeedback) -> StoreResult<Feedback>;
    async fn get_by_id(&self, id: u64) -> StoreResult<Feedback>;
    async fn get_all(&self) -> StoreResult<Vec<Feedback>>;
    async fn get_by_session(&self, session: SessionNumber) -> StoreResult<Vec<Feedback>>;
    async fn summary(&self, session: Option<SessionNumber>) -> StoreResult<FeedbackSummary>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
