// Unit tests for the feed wire types.
//
// Feed lines arrive with the device bridge's camelCase keys. These tests
// pin the deserialization rules: `kind` defaults to posted, removal entries
// carry no extras, and absent text fields read back as empty strings.

use magpie::feed::event::{EntryKind, FeedEntry, NotificationEvent};

#[test]
fn posted_entry_parses_camel_case_keys() {
    let json = r#"{
        "kind": "posted",
        "sourceId": "com.google.android.gm",
        "postedAtMillis": 1723000000000,
        "id": 42,
        "extras": {"title": "Alice", "text": "Hi", "bigText": "Hi there"}
    }"#;
    let entry: FeedEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.kind, EntryKind::Posted);
    assert_eq!(entry.source_id, "com.google.android.gm");
    assert_eq!(entry.posted_at_millis, 1723000000000);
    assert_eq!(entry.id, 42);

    let event = entry.into_event();
    assert_eq!(event.title(), "Alice");
    assert_eq!(event.text(), "Hi");
    assert_eq!(event.big_text(), "Hi there");
}

#[test]
fn kind_defaults_to_posted_when_absent() {
    let json = r#"{"sourceId": "com.google.android.gm", "postedAtMillis": 1000, "id": 1}"#;
    let entry: FeedEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.kind, EntryKind::Posted);
}

#[test]
fn removal_entry_needs_only_source_and_id() {
    let json = r#"{"kind": "removed", "sourceId": "com.google.android.gm", "id": 42}"#;
    let entry: FeedEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.kind, EntryKind::Removed);
    assert_eq!(entry.posted_at_millis, 0);
    assert!(entry.extras.is_none());
}

#[test]
fn unknown_kind_fails_to_parse() {
    let json = r#"{"kind": "snoozed", "sourceId": "com.google.android.gm", "id": 1}"#;
    assert!(serde_json::from_str::<FeedEntry>(json).is_err());
}

#[test]
fn missing_extras_read_back_as_empty_text() {
    let json = r#"{"sourceId": "com.google.android.gm", "id": 3}"#;
    let event: NotificationEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.title(), "");
    assert_eq!(event.text(), "");
    assert_eq!(event.big_text(), "");
    assert_eq!(event.posted_at_millis, 0);
}

#[test]
fn partial_extras_leave_the_rest_empty() {
    let json = r#"{
        "sourceId": "com.google.android.gm",
        "postedAtMillis": 50,
        "id": 4,
        "extras": {"title": "Only a title"}
    }"#;
    let event: NotificationEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.title(), "Only a title");
    assert_eq!(event.text(), "");
    assert_eq!(event.big_text(), "");
}

#[test]
fn into_event_carries_every_field() {
    let json = r#"{
        "sourceId": "com.other.app",
        "postedAtMillis": 777,
        "id": 9,
        "extras": {"text": "body"}
    }"#;
    let entry: FeedEntry = serde_json::from_str(json).unwrap();
    let event = entry.into_event();
    assert_eq!(event.source_id, "com.other.app");
    assert_eq!(event.posted_at_millis, 777);
    assert_eq!(event.id, 9);
    assert_eq!(event.text(), "body");
}

#[test]
fn missing_id_fails_to_parse() {
    let json = r#"{"sourceId": "com.google.android.gm"}"#;
    assert!(serde_json::from_str::<FeedEntry>(json).is_err());
}
