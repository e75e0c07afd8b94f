// Wire and domain types for the notification feed.
//
// Feed entries use the same camelCase keys the device-side bridge emits
// (`sourceId`, `postedAtMillis`, `extras.bigText`). Text fields live in an
// optional extras mapping, mirroring how the platform attaches them to a
// notification; any or all of them can be missing.

use serde::Deserialize;

/// One notification event as observed from the device.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    /// Package name of the application that posted the notification.
    pub source_id: String,
    /// When the platform received the notification (epoch millis).
    #[serde(default)]
    pub posted_at_millis: i64,
    /// Platform notification id.
    pub id: i32,
    /// Text payload. Absent entirely for notifications without extras.
    pub extras: Option<NotificationExtras>,
}

/// The text fields of a notification's extras mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationExtras {
    pub title: Option<String>,
    pub text: Option<String>,
    pub big_text: Option<String>,
}

impl NotificationEvent {
    /// Notification title, or "" when absent.
    pub fn title(&self) -> &str {
        self.extras
            .as_ref()
            .and_then(|e| e.title.as_deref())
            .unwrap_or("")
    }

    /// Short notification text, or "" when absent.
    pub fn text(&self) -> &str {
        self.extras
            .as_ref()
            .and_then(|e| e.text.as_deref())
            .unwrap_or("")
    }

    /// Expanded notification text, or "" when absent.
    pub fn big_text(&self) -> &str {
        self.extras
            .as_ref()
            .and_then(|e| e.big_text.as_deref())
            .unwrap_or("")
    }
}

/// Which kind of event a feed entry carries. An absent `kind` means posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Posted,
    Removed,
}

impl Default for EntryKind {
    fn default() -> Self {
        Self::Posted
    }
}

/// One line of the JSON feed, before dispatch.
///
/// Removal entries carry only `sourceId` and `id`; the posted-time and
/// extras fields exist only on posted entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    #[serde(default)]
    pub kind: EntryKind,
    pub source_id: String,
    #[serde(default)]
    pub posted_at_millis: i64,
    pub id: i32,
    pub extras: Option<NotificationExtras>,
}

impl FeedEntry {
    /// Convert a posted entry into the event the forwarder consumes.
    pub fn into_event(self) -> NotificationEvent {
        NotificationEvent {
            source_id: self.source_id,
            posted_at_millis: self.posted_at_millis,
            id: self.id,
            extras: self.extras,
        }
    }
}
