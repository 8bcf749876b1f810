//! The DiscordHook plugin.

#[cfg(feature = "config")]
use clap::Args;
use discordhook_webhook::{DiscordMessage, WebhookRequest, WebhookService};
use serde::{Deserialize, Serialize};

use crate::metadata::ServiceMetadata;
use crate::{Order, OrderEvent, ProvisionData, ProvisionProvider, Result};

/// Plugin settings, injected at construction.
///
/// The host's settings store owns these values (`discordhook::webhook_url`,
/// `discordhook::username`); they arrive here already resolved. No URL
/// validation happens at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct HookConfig {
    /// Discord incoming-webhook URL to post messages to
    #[cfg_attr(
        feature = "config",
        arg(long = "webhook-url", env = "DISCORDHOOK_WEBHOOK_URL")
    )]
    pub webhook_url: String,

    /// Sender name shown in the Discord channel
    #[cfg_attr(
        feature = "config",
        arg(long = "webhook-username", env = "DISCORDHOOK_USERNAME")
    )]
    pub username: String,
}

impl HookConfig {
    /// Creates a new configuration.
    pub fn new(webhook_url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            username: username.into(),
        }
    }

    /// Set the webhook URL.
    #[must_use]
    pub fn with_webhook_url(mut self, webhook_url: impl Into<String>) -> Self {
        self.webhook_url = webhook_url.into();
        self
    }

    /// Set the sender username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }
}

/// Discord notification plugin for order lifecycle events.
///
/// Each lifecycle operation renders the fixed template for its event and
/// posts `{"username", "content"}` to the configured webhook URL. The
/// response is not inspected; transport failures propagate to the host.
#[derive(Debug, Clone)]
pub struct DiscordHook {
    config: HookConfig,
    webhook: WebhookService,
}

impl DiscordHook {
    /// Creates the plugin from its settings and a delivery service.
    pub fn new(config: HookConfig, webhook: WebhookService) -> Self {
        Self { config, webhook }
    }

    /// Creates the plugin backed by the reqwest delivery client.
    #[cfg(feature = "reqwest")]
    #[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
    pub fn with_defaults(config: HookConfig) -> Self {
        let client = discordhook_webhook::reqwest::ReqwestClient::default();
        Self::new(config, client.into_service())
    }

    /// Returns the plugin metadata advertised to the host.
    pub fn metadata() -> ServiceMetadata {
        ServiceMetadata {
            key: crate::SERVICE_KEY,
            display_name: "DiscordHook",
            author: "WemX",
            version: "1.0.0",
            host_version: ">=1.8.0",
        }
    }

    /// Gets the plugin configuration.
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    async fn notify(&self, event: OrderEvent, order: &Order) -> Result<()> {
        let message = DiscordMessage::new(&self.config.username, event.message(order));
        let request =
            WebhookRequest::new(&self.config.webhook_url, message).with_event(event.label());

        // One send per event. The response status is deliberately ignored;
        // only transport failures reach the host.
        self.webhook.deliver(&request).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProvisionProvider for DiscordHook {
    async fn create(&self, order: &Order, _data: &ProvisionData) -> Result<()> {
        self.notify(OrderEvent::Created, order).await
    }

    async fn suspend(&self, order: &Order, _data: &ProvisionData) -> Result<()> {
        self.notify(OrderEvent::Suspended, order).await
    }

    async fn unsuspend(&self, order: &Order, _data: &ProvisionData) -> Result<()> {
        self.notify(OrderEvent::Unsuspended, order).await
    }

    async fn terminate(&self, order: &Order, _data: &ProvisionData) -> Result<()> {
        self.notify(OrderEvent::Terminated, order).await
    }
}
