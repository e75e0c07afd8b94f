// Unit tests for the outbound envelope.
//
// The receiving server is strict about the body: seven keys, fixed order,
// text fields always present as strings. These tests pin that contract by
// asserting on the serialized JSON text itself, not just on parsed values.

use magpie::feed::event::{NotificationEvent, NotificationExtras};
use magpie::webhook::envelope::OutboundEnvelope;

fn event(extras: Option<NotificationExtras>) -> NotificationEvent {
    NotificationEvent {
        source_id: "com.google.android.gm".to_string(),
        posted_at_millis: 1000,
        id: 7,
        extras,
    }
}

#[test]
fn field_order_matches_the_server_contract() {
    let envelope = OutboundEnvelope {
        device_id: "dev".to_string(),
        titulo: "t".to_string(),
        texto: "x".to_string(),
        texto_largo: "l".to_string(),
        tiempo: 1,
        id_notificacion: 2,
        timestamp_envio: 3,
    };
    let body = serde_json::to_string(&envelope).unwrap();
    assert_eq!(
        body,
        r#"{"device_id":"dev","titulo":"t","texto":"x","texto_largo":"l","tiempo":1,"id_notificacion":2,"timestamp_envio":3}"#
    );
}

#[test]
fn missing_text_fields_serialize_as_empty_strings() {
    let envelope = OutboundEnvelope::from_event(&event(None), "MOBILE_001");
    let body = serde_json::to_string(&envelope).unwrap();
    assert!(body.contains(r#""titulo":"""#), "body was {body}");
    assert!(body.contains(r#""texto":"""#), "body was {body}");
    assert!(body.contains(r#""texto_largo":"""#), "body was {body}");
    assert!(!body.contains("null"), "no field may be null: {body}");
}

#[test]
fn partial_extras_fill_only_the_present_fields() {
    let extras = NotificationExtras {
        title: Some("Alice".to_string()),
        text: None,
        big_text: None,
    };
    let envelope = OutboundEnvelope::from_event(&event(Some(extras)), "MOBILE_001");
    assert_eq!(envelope.titulo, "Alice");
    assert_eq!(envelope.texto, "");
    assert_eq!(envelope.texto_largo, "");
}

#[test]
fn quotes_and_line_breaks_in_text_are_escaped() {
    let extras = NotificationExtras {
        title: Some("He said \"hi\"\nBye".to_string()),
        text: Some("line\rbreak".to_string()),
        big_text: None,
    };
    let envelope = OutboundEnvelope::from_event(&event(Some(extras)), "MOBILE_001");
    let body = serde_json::to_string(&envelope).unwrap();
    assert!(
        body.contains(r#""titulo":"He said \"hi\"\nBye""#),
        "body was {body}"
    );
    assert!(body.contains(r#""texto":"line\rbreak""#), "body was {body}");

    // The escaped body still parses back to the original text.
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["titulo"], "He said \"hi\"\nBye");
    assert_eq!(parsed["texto"], "line\rbreak");
}

#[test]
fn from_event_copies_event_fields_and_stamps_send_time() {
    let extras = NotificationExtras {
        title: Some("Alice".to_string()),
        text: Some("Hi".to_string()),
        big_text: Some(String::new()),
    };

    let before = chrono::Utc::now().timestamp_millis();
    let envelope = OutboundEnvelope::from_event(&event(Some(extras)), "MOBILE_001");
    let after = chrono::Utc::now().timestamp_millis();

    assert_eq!(envelope.device_id, "MOBILE_001");
    assert_eq!(envelope.titulo, "Alice");
    assert_eq!(envelope.texto, "Hi");
    assert_eq!(envelope.texto_largo, "");
    assert_eq!(envelope.tiempo, 1000);
    assert_eq!(envelope.id_notificacion, 7);
    assert!(
        envelope.timestamp_envio >= before && envelope.timestamp_envio <= after,
        "send time {} outside [{before}, {after}]",
        envelope.timestamp_envio
    );
}

#[test]
fn serialized_body_for_a_typical_event() {
    let extras = NotificationExtras {
        title: Some("Alice".to_string()),
        text: Some("Hi".to_string()),
        big_text: None,
    };
    let envelope = OutboundEnvelope::from_event(&event(Some(extras)), "MOBILE_001");
    let body = serde_json::to_string(&envelope).unwrap();
    assert!(
        body.starts_with(
            r#"{"device_id":"MOBILE_001","titulo":"Alice","texto":"Hi","texto_largo":"","tiempo":1000,"id_notificacion":7,"timestamp_envio":"#
        ),
        "body was {body}"
    );
}
