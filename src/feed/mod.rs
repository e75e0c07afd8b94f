// Notification feed: the inbound event boundary.
//
// Events arrive as JSON lines (one entry per line) from stdin or a file,
// bridged off the device by whatever can print them. Each entry is either
// a posted notification or a removal notice.

pub mod event;
pub mod reader;
