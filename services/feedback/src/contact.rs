//! Contact-form delivery hook.
//!
//! # Purpose
//! Contact messages are not stored or delivered anywhere yet. The
//! `ContactNotifier` trait is the seam where an email or CRM integration
//! would plug in; the only implementation logs the message and returns.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> anyhow::Result<()>;

    fn notifier_name(&self) -> &'static str;
}

/// Writes contact submissions to the service log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn notify(&self, message: &ContactMessage) -> anyhow::Result<()> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            body = %message.message,
            "contact form submission"
        );
        Ok(())
    }

    fn notifier_name(&self) -> &'static str {
        "log"
    }
}
