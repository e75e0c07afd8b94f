// Webhook delivery: trait-based abstraction for the outbound boundary.
//
// The WebhookSink trait defines the interface. HttpWebhookSink implements
// it with a long-lived reqwest client. The pipeline only ever talks to the
// trait, so tests can swap in an in-memory sink and the forwarder never
// knows the difference.

pub mod envelope;
pub mod http;
pub mod traits;
