//! Recording webhook provider for testing.
//!
//! This module is available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! discordhook-webhook = { version = "...", features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use jiff::Timestamp;

use crate::{Result, ServiceHealth, WebhookProvider, WebhookRequest, WebhookResponse};

/// A delivery captured by [`RecordingProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDelivery {
    /// The target URL the request was addressed to.
    pub url: String,
    /// The serialized JSON body that would have been posted.
    pub body: String,
}

/// Webhook provider that records every delivery instead of performing HTTP.
///
/// Returns a configurable status code, defaulting to 204 (Discord's success
/// status for incoming webhooks).
#[derive(Debug, Clone)]
pub struct RecordingProvider {
    status_code: u16,
    deliveries: Arc<Mutex<Vec<RecordedDelivery>>>,
}

impl Default for RecordingProvider {
    fn default() -> Self {
        Self::with_status(204)
    }
}

impl RecordingProvider {
    /// Creates a provider that answers every delivery with the given status.
    pub fn with_status(status_code: u16) -> Self {
        Self {
            status_code,
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all deliveries recorded so far, in order.
    pub fn deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries.lock().expect("deliveries lock").clone()
    }
}

#[async_trait::async_trait]
impl WebhookProvider for RecordingProvider {
    async fn deliver(&self, request: &WebhookRequest) -> Result<WebhookResponse> {
        let started_at = Timestamp::now();
        let body = serde_json::to_string(&request.message)
            .map_err(|e| crate::Error::serialization().with_source(e))?;

        self.deliveries
            .lock()
            .expect("deliveries lock")
            .push(RecordedDelivery {
                url: request.url.clone(),
                body,
            });

        Ok(WebhookResponse::new(
            request.request_id,
            self.status_code,
            started_at,
        ))
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}
