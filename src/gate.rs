// Permission gate: has the device granted the listener notification access?
//
// The platform keeps the answer in its secure settings as a single
// colon-delimited string of flattened `package/component` names, one entry
// per listener the user enabled. The membership test is a pure function
// over that blob; where the blob comes from is injected behind a probe so
// the parser can be tested directly.
//
// The forwarder never consults the gate: access being granted is an
// out-of-band precondition established on the device, not something
// checked per event.

/// Read-only query for whether the listener currently holds notification
/// access.
pub trait AccessProbe {
    fn is_authorized(&self) -> bool;
}

/// Probe backed by a snapshot of the device's enabled-listeners blob,
/// as exported by `adb shell settings get secure enabled_notification_listeners`.
pub struct SettingsProbe {
    enabled_listeners: Option<String>,
    own_package: String,
}

impl SettingsProbe {
    /// Create a probe over a blob snapshot. `None` means the setting was
    /// never written; access was never granted to anything.
    pub fn new(enabled_listeners: Option<String>, own_package: &str) -> Self {
        Self {
            enabled_listeners,
            own_package: own_package.to_string(),
        }
    }
}

impl AccessProbe for SettingsProbe {
    fn is_authorized(&self) -> bool {
        self.enabled_listeners
            .as_deref()
            .is_some_and(|blob| listener_enabled(blob, &self.own_package))
    }
}

/// Membership test over the platform's enabled-listeners blob.
///
/// Each entry is a flattened component name; the package is the text
/// before the first `/`. An entry matches when that package portion equals
/// `own_package` exactly; no prefix or wildcard matching. Entries without
/// a `/` are malformed and never match. An empty blob matches nothing.
pub fn listener_enabled(enabled_listeners: &str, own_package: &str) -> bool {
    enabled_listeners
        .split(':')
        .filter_map(|entry| entry.split_once('/'))
        .any(|(package, _component)| package == own_package)
}
