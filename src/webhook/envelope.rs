// The JSON record sent to the webhook, one per qualifying notification.

use serde::Serialize;

use crate::feed::event::NotificationEvent;

/// Outbound envelope for a single forwarded notification.
///
/// The declaration order of the fields is the wire contract: the receiving
/// server expects exactly these seven keys, in this order, all present.
/// Key names are the server's (Spanish) schema and must not change.
/// serde_json handles string escaping: quotes, newlines, and carriage
/// returns in notification text come out as `\"`, `\n`, `\r`.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEnvelope {
    /// Static identifier of the install that observed the notification.
    pub device_id: String,
    /// Notification title, empty when the notification carried none.
    pub titulo: String,
    /// Short notification text, empty when absent.
    pub texto: String,
    /// Expanded notification text, empty when absent.
    pub texto_largo: String,
    /// When the platform received the notification (epoch millis).
    pub tiempo: i64,
    /// Platform notification id.
    pub id_notificacion: i32,
    /// When this envelope was built (epoch millis).
    pub timestamp_envio: i64,
}

impl OutboundEnvelope {
    /// Build the envelope for one event, capturing the send-time timestamp.
    ///
    /// Absent text fields become empty strings, never null and never an
    /// omitted key.
    pub fn from_event(event: &NotificationEvent, device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
            titulo: event.title().to_string(),
            texto: event.text().to_string(),
            texto_largo: event.big_text().to_string(),
            tiempo: event.posted_at_millis,
            id_notificacion: event.id,
            timestamp_envio: chrono::Utc::now().timestamp_millis(),
        }
    }
}
