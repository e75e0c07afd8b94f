// Notification forwarding: filter, extract, envelope, deliver.
//
// One notification in, at most one HTTP POST out. Each event is processed
// statelessly and independently. The filter is a single package-name
// equality check and extraction is three lookups with empty-string
// defaults. Delivery runs on its own task so the caller is never blocked
// and never sees a delivery failure. There is no retry and no queue.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::feed::event::NotificationEvent;
use crate::webhook::envelope::OutboundEnvelope;
use crate::webhook::traits::{DeliveryOutcome, WebhookSink};

/// Converts each qualifying notification event into exactly one
/// best-effort outbound delivery.
pub struct Forwarder {
    source_package: String,
    device_id: String,
    sink: Arc<dyn WebhookSink>,
}

impl Forwarder {
    /// Create a forwarder watching `source_package`, stamping envelopes
    /// with `device_id`, and delivering through `sink`.
    pub fn new(source_package: &str, device_id: &str, sink: Arc<dyn WebhookSink>) -> Self {
        Self {
            source_package: source_package.to_string(),
            device_id: device_id.to_string(),
            sink,
        }
    }

    /// Handle one posted notification.
    ///
    /// Returns the delivery task's handle when the event matches the
    /// watched package, `None` when it was discarded. Callers may await
    /// the handle to observe the outcome or drop it for fire-and-forget;
    /// either way the attempt runs to completion and failures go no
    /// further than a log entry.
    pub fn on_posted(&self, event: &NotificationEvent) -> Option<JoinHandle<DeliveryOutcome>> {
        debug!(package = %event.source_id, id = event.id, "Notification posted");

        // Exact package-name match only; anything else is not an error,
        // just not ours.
        if event.source_id != self.source_package {
            return None;
        }

        let envelope = OutboundEnvelope::from_event(event, &self.device_id);

        info!(id = envelope.id_notificacion, "Notification matches watched package, forwarding");
        debug!(
            title = %envelope.titulo,
            text = %envelope.texto,
            big_text_len = envelope.texto_largo.len(),
            posted_at = envelope.tiempo,
            "Envelope built"
        );

        let sink = Arc::clone(&self.sink);
        Some(tokio::spawn(async move {
            deliver(sink.as_ref(), &envelope).await
        }))
    }

    /// Acknowledge a removed notification.
    ///
    /// Removals are never forwarded; a removal of a watched-source
    /// notification is logged and removals from other sources are ignored
    /// entirely.
    pub fn on_removed(&self, source_id: &str, id: i32) {
        if source_id == self.source_package {
            debug!(id, "Watched notification removed");
        }
    }
}

/// Run one delivery attempt and reduce it to a terminal outcome.
///
/// Every failure mode ends here as a log entry; nothing propagates back
/// to the event-processing path.
async fn deliver(sink: &dyn WebhookSink, envelope: &OutboundEnvelope) -> DeliveryOutcome {
    match sink.deliver(envelope).await {
        Ok(status) if (200..300).contains(&status) => {
            info!(status, id = envelope.id_notificacion, "Envelope delivered");
            DeliveryOutcome::Delivered(status)
        }
        Ok(status) => {
            warn!(status, id = envelope.id_notificacion, "Webhook rejected envelope");
            DeliveryOutcome::Rejected(status)
        }
        Err(e) => {
            error!(error = %e, id = envelope.id_notificacion, "Webhook delivery failed");
            DeliveryOutcome::Failed
        }
    }
}
