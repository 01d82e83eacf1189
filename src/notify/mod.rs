//! Webhook notifications for new submissions.
//!
//! Like persistence, notification is a best-effort channel: delivery failures
//! are logged by the caller and never surface in the client response. A
//! missing webhook URL disables delivery with a warning rather than an error.

mod format;

pub use format::{format_contact_message, format_request_message};

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;

use crate::config::NotificationsConfig;

/// Destination for formatted submission summaries.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Deliver one message. An `Err` means delivery failed; callers log it
    /// and move on.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Build the notifier described by configuration.
///
/// Returns a [`NullNotifier`] when notifications are disabled or no webhook
/// URL can be resolved.
pub fn from_config(config: &NotificationsConfig) -> Arc<dyn Notifier> {
    if !config.enabled || !config.webhook.enabled {
        tracing::info!("Notifications disabled by configuration");
        return Arc::new(NullNotifier);
    }

    match config.webhook.resolve_url() {
        Some(url) => {
            let name = config
                .webhook
                .name
                .clone()
                .unwrap_or_else(|| "webhook".to_string());
            Arc::new(WebhookNotifier::new(name, url))
        }
        None => {
            tracing::warn!(
                env_var = %config.webhook.url_env,
                "Webhook URL not configured, submission notifications will be skipped"
            );
            Arc::new(NullNotifier)
        }
    }
}

/// Posts Slack-compatible `{"text": ...}` payloads to a webhook URL.
pub struct WebhookNotifier {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        true
    }

    async fn send(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(webhook = %self.name, "Notification delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(anyhow!("webhook returned {}: {}", status, body))
        }
    }
}

/// Notifier used when no webhook is configured; delivery is a logged no-op.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    fn name(&self) -> &str {
        "null"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn send(&self, _text: &str) -> Result<()> {
        tracing::debug!("No webhook configured, skipping notification");
        Ok(())
    }
}
