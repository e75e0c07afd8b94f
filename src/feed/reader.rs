// Feed loop: read JSON lines, dispatch into the forwarder.
//
// The loop itself is sequential and never blocks on a delivery: the
// forwarder spawns each delivery onto its own task and the loop only keeps
// the join handles so it can flush stragglers at EOF. A malformed line is
// warned about and skipped; it never aborts the feed.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::forwarder::Forwarder;
use crate::webhook::traits::DeliveryOutcome;

use super::event::{EntryKind, FeedEntry};

/// Counters for one pass over the feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    /// Non-blank lines seen, whether or not they parsed.
    pub entries: usize,
    /// Posted entries that matched the watched package and were dispatched.
    pub forwarded: usize,
    /// Posted entries from other packages, silently discarded.
    pub ignored: usize,
    /// Removal entries acknowledged.
    pub removed: usize,
    /// Lines that failed to decode or parse and were skipped.
    pub malformed: usize,
}

/// Follow the feed until EOF, forwarding qualifying events.
///
/// Each delivery runs independently on its own task; the loop reaps
/// finished handles as it goes and, at EOF, grants the stragglers one
/// `drain_window` before returning. A long-running feed never reaches the
/// drain path.
pub async fn run<R>(feed: R, forwarder: &Forwarder, drain_window: Duration) -> Result<FeedSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = FeedSummary::default();
    let mut in_flight: Vec<JoinHandle<DeliveryOutcome>> = Vec::new();
    let mut lines = feed.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            // An undecodable line is malformed like any other. The reader
            // has already consumed its bytes, so the next read resumes at
            // the following line.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "Skipping feed line that is not valid UTF-8");
                summary.entries += 1;
                summary.malformed += 1;
                continue;
            }
            Err(e) => return Err(e).context("Failed to read feed line"),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        summary.entries += 1;

        let entry: FeedEntry = match serde_json::from_str(line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping malformed feed entry");
                summary.malformed += 1;
                continue;
            }
        };

        match entry.kind {
            EntryKind::Removed => {
                forwarder.on_removed(&entry.source_id, entry.id);
                summary.removed += 1;
            }
            EntryKind::Posted => {
                let event = entry.into_event();
                match forwarder.on_posted(&event) {
                    Some(handle) => {
                        in_flight.push(handle);
                        summary.forwarded += 1;
                    }
                    None => summary.ignored += 1,
                }
            }
        }

        // Reap deliveries that already completed so the in-flight list
        // doesn't grow with the feed.
        in_flight.retain(|handle| !handle.is_finished());
    }

    info!(
        entries = summary.entries,
        forwarded = summary.forwarded,
        ignored = summary.ignored,
        removed = summary.removed,
        malformed = summary.malformed,
        "Feed ended, forwarder stopping"
    );

    drain(in_flight, drain_window).await;
    Ok(summary)
}

/// Wait for in-flight deliveries at EOF, bounded by one drain window.
///
/// Outcomes were already logged by the delivery tasks themselves; anything
/// still pending when the window closes is abandoned to process exit.
async fn drain(in_flight: Vec<JoinHandle<DeliveryOutcome>>, window: Duration) {
    if in_flight.is_empty() {
        return;
    }

    debug!(in_flight = in_flight.len(), "Waiting for in-flight deliveries");

    if tokio::time::timeout(window, futures::future::join_all(in_flight))
        .await
        .is_err()
    {
        warn!(
            window_secs = window.as_secs(),
            "Deliveries still in flight when the drain window closed"
        );
    }
}
