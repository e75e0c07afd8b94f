// HTTP webhook sink: reqwest implementation of the delivery seam.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::envelope::OutboundEnvelope;
use super::traits::WebhookSink;

/// Path appended to the server base URL for notification deliveries.
pub const WEBHOOK_PATH: &str = "/webhook/gmail-notification";

/// Static User-Agent sent with every delivery.
pub const USER_AGENT: &str = "magpie/0.1 (notification-forwarder)";

/// Webhook sink backed by a long-lived reqwest client.
///
/// The client is built once and reused across deliveries for connection
/// pooling; its pool is the only shared state between concurrent delivery
/// tasks. The per-request timeout bounds how long any one delivery can
/// linger against an unreachable server.
pub struct HttpWebhookSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWebhookSink {
    /// Create a sink posting to `<base_url>/webhook/gmail-notification`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), WEBHOOK_PATH),
        })
    }

    /// The full URL deliveries are POSTed to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WebhookSink for HttpWebhookSink {
    async fn deliver(&self, envelope: &OutboundEnvelope) -> Result<u16> {
        debug!(endpoint = %self.endpoint, id = envelope.id_notificacion, "POST webhook");

        let response = self
            .client
            .post(&self.endpoint)
            .json(envelope)
            .send()
            .await
            .context("Webhook request failed")?;

        // The response body is never read; dropping the response releases
        // the connection back to the pool whatever the status was.
        Ok(response.status().as_u16())
    }
}
