//! Webhook service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::{Result, TRACING_TARGET, WebhookProvider, WebhookRequest, WebhookResponse};

/// Webhook service wrapper with observability.
///
/// Adds structured logging to any webhook delivery implementation. The inner
/// provider is wrapped in `Arc` for cheap cloning. Exactly one provider call
/// is made per `deliver`; the wrapper never retries or duplicates a send.
#[derive(Clone)]
pub struct WebhookService {
    inner: Arc<dyn WebhookProvider>,
}

impl fmt::Debug for WebhookService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookService").finish_non_exhaustive()
    }
}

impl WebhookService {
    /// Create a new webhook service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: WebhookProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Delivers a webhook message to the endpoint named by the request.
    pub async fn deliver(&self, request: &WebhookRequest) -> Result<WebhookResponse> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            url = %request.url,
            event = %request.event,
            "Delivering webhook"
        );

        let result = self.inner.deliver(request).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(response) => {
                if response.is_success() {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        request_id = %request.request_id,
                        response_id = %response.response_id,
                        status_code = response.status_code,
                        elapsed_ms = elapsed.as_millis(),
                        "Webhook delivered successfully"
                    );
                } else {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        request_id = %request.request_id,
                        response_id = %response.response_id,
                        status_code = response.status_code,
                        elapsed_ms = elapsed.as_millis(),
                        "Webhook endpoint rejected delivery"
                    );
                }
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Webhook delivery error"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscordMessage;
    use crate::mock::RecordingProvider;

    #[tokio::test]
    async fn test_deliver_passes_through_provider_response() {
        let provider = RecordingProvider::default();
        let service = WebhookService::new(provider.clone());

        let request = WebhookRequest::new(
            "https://discord.com/api/webhooks/1/abc",
            DiscordMessage::new("bot", "hello"),
        );
        let response = service.deliver(&request).await.unwrap();

        assert!(response.is_success());
        assert_eq!(provider.deliveries().len(), 1);
    }
}
