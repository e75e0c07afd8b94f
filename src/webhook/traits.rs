// Webhook sink trait: the delivery seam.
//
// The forwarder hands envelopes to a WebhookSink and never learns more
// than "a response arrived" or "the request never completed". Keeping the
// seam this narrow is what lets the composition tests run the whole
// pipeline against an in-memory sink.

use anyhow::Result;
use async_trait::async_trait;

use super::envelope::OutboundEnvelope;

/// Trait for delivering envelopes. Implementations must be async because
/// delivery is an HTTP call.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Deliver one envelope.
    ///
    /// Returns the HTTP status code whenever the server answered at all,
    /// 2xx or not. An error means the request never completed, whether connection
    /// failure or timeout.
    async fn deliver(&self, envelope: &OutboundEnvelope) -> Result<u16>;
}

/// Terminal reduction of one delivery attempt.
///
/// Every attempt ends in exactly one of these, already logged by the time
/// the caller sees it. There is no retry in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The server accepted the envelope (2xx).
    Delivered(u16),
    /// The server answered with a non-2xx status.
    Rejected(u16),
    /// The request never completed.
    Failed,
}
