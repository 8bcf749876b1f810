//! Webhook delivery request types.

use std::time::Duration;

use uuid::Uuid;

use crate::DiscordMessage;

/// A webhook delivery request.
///
/// The URL is carried verbatim from configuration; no validation happens
/// here and an empty or malformed URL still produces a delivery attempt.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The webhook endpoint URL.
    pub url: String,
    /// Event label, used for tracing only and never serialized.
    pub event: String,
    /// The message to deliver.
    pub message: DiscordMessage,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
}

impl WebhookRequest {
    /// Creates a new webhook request.
    pub fn new(url: impl Into<String>, message: DiscordMessage) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            url: url.into(),
            event: String::new(),
            message,
            timeout: None,
        }
    }

    /// Sets the event label used in tracing output.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
