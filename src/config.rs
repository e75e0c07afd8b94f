use std::env;
use std::time::Duration;

use anyhow::Result;

/// Fallback per-request delivery timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Central configuration loaded from environment variables.
///
/// Everything comes from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Webhook server base URL (e.g. http://192.168.1.20:8000).
    /// Required for `run` and `send`.
    pub server_url: String,
    /// Static identifier for this install, sent with every envelope.
    pub device_id: String,
    /// Package name of the application whose notifications are forwarded.
    pub source_package: String,
    /// Package name the listener bridge registers as on the device.
    /// Required for `status`.
    pub own_package: String,
    /// Snapshot of the device's enabled-listeners blob (colon-delimited
    /// package/component entries). Unset means access was never granted.
    pub enabled_listeners: Option<String>,
    /// Per-request timeout for webhook deliveries.
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The device id, source package, and timeout have defaults; the
    /// server URL is required for anything that delivers.
    pub fn load() -> Result<Self> {
        let timeout_secs = env::var("MAGPIE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Ok(Self {
            server_url: env::var("MAGPIE_SERVER_URL").unwrap_or_default(),
            device_id: env::var("MAGPIE_DEVICE_ID").unwrap_or_else(|_| "MOBILE_001".to_string()),
            source_package: env::var("MAGPIE_SOURCE_PACKAGE")
                .unwrap_or_else(|_| "com.google.android.gm".to_string()),
            own_package: env::var("MAGPIE_OWN_PACKAGE").unwrap_or_default(),
            enabled_listeners: env::var("MAGPIE_ENABLED_LISTENERS").ok(),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Check that the webhook server URL is configured.
    /// Call this before any operation that delivers envelopes.
    pub fn require_server(&self) -> Result<()> {
        if self.server_url.is_empty() {
            anyhow::bail!(
                "MAGPIE_SERVER_URL not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Check that the listener's own package name is configured.
    /// Call this before evaluating the permission gate.
    pub fn require_identity(&self) -> Result<()> {
        if self.own_package.is_empty() {
            anyhow::bail!(
                "MAGPIE_OWN_PACKAGE not set. This is the package name the\n\
                 listener bridge registers as on the device. Add it to your\n\
                 .env file (see .env.example)."
            );
        }
        Ok(())
    }
}
