//! Reqwest-based HTTP client for webhook delivery.

use std::sync::Arc;

use jiff::Timestamp;
use reqwest::Client;

use super::{ReqwestConfig, TRACING_TARGET};
use crate::{Error, ServiceHealth, WebhookProvider, WebhookRequest, WebhookResponse, WebhookService};

/// Inner client that holds the HTTP client and configuration.
struct ReqwestClientInner {
    http: Client,
    config: ReqwestConfig,
}

/// Reqwest-based HTTP client for delivering webhook messages to Discord.
///
/// Implements the [`WebhookProvider`] trait. A delivery is exactly one POST
/// with a JSON body; the response status is recorded into the
/// [`WebhookResponse`] and never branched on here.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<ReqwestClientInner>,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new reqwest client with the given configuration.
    pub fn new(config: ReqwestConfig) -> Self {
        let timeout = config.timeout();

        tracing::debug!(
            target: TRACING_TARGET,
            timeout_ms = timeout.as_millis(),
            "Creating reqwest client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent())
            .build()
            .expect("failed to create HTTP client");

        let inner = ReqwestClientInner { http, config };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }

    /// Converts this client into a [`WebhookService`] for use with dependency injection.
    pub fn into_service(self) -> WebhookService {
        WebhookService::new(self)
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(ReqwestConfig::default())
    }
}

/// Classifies a reqwest failure into the crate's error taxonomy.
fn transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::timeout()
            .with_message(error.to_string())
            .with_source(error)
    } else if error.is_connect() {
        Error::network_error()
            .with_message("Connection failed")
            .with_source(error)
    } else {
        Error::network_error()
            .with_message(error.to_string())
            .with_source(error)
    }
}

#[async_trait::async_trait]
impl WebhookProvider for ReqwestClient {
    async fn deliver(&self, request: &WebhookRequest) -> crate::Result<WebhookResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            url = %request.url,
            event = %request.event,
            "Delivering webhook"
        );

        let body = serde_json::to_vec(&request.message)
            .map_err(|e| Error::serialization().with_message(e.to_string()).with_source(e))?;

        // Per-request timeout wins over the client-wide default.
        let timeout = request.timeout.unwrap_or_else(|| self.config().timeout());

        // One POST, no retries. The URL goes out as configured; a malformed
        // or empty URL fails inside reqwest and propagates to the caller.
        let http_response = self
            .http()
            .post(request.url.as_str())
            .header("Content-Type", "application/json")
            .timeout(timeout)
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status_code = http_response.status().as_u16();
        let response = WebhookResponse::new(request.request_id, status_code, started_at);

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            status_code,
            success = response.is_success(),
            "Webhook delivery completed"
        );

        Ok(response)
    }

    async fn health_check(&self) -> crate::Result<ServiceHealth> {
        // The client is stateless and always healthy if it was created successfully
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::ServiceStatus;

    #[test]
    fn test_client_creation() {
        let config = ReqwestConfig::default();
        let client = ReqwestClient::new(config);
        assert!(client.config().user_agent.is_none());
    }

    #[test]
    fn test_client_honors_custom_config() {
        let config = ReqwestConfig::default()
            .with_timeout(5)
            .with_user_agent("billing/2.0");
        let client = ReqwestClient::new(config);

        assert_eq!(client.config().timeout(), Duration::from_secs(5));
        assert_eq!(client.config().user_agent(), "billing/2.0");
    }

    #[tokio::test]
    async fn test_health_check() {
        let client = ReqwestClient::default();
        let health = client.health_check().await.unwrap();
        assert_eq!(health.status, ServiceStatus::Healthy);
    }
}
