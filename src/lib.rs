// Magpie: notification-to-webhook forwarding
//
// This is the library root. Each module corresponds to one stage of the
// forwarding pipeline or one boundary of the system.

pub mod config;
pub mod feed;
pub mod forwarder;
pub mod gate;
pub mod status;
pub mod webhook;
