//! Status updates with per-message rate limiting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use tracing::warn;

use crate::sink::NotificationSink;
use vsample_models::{ChatId, MessageId};

/// Minimum seconds between edits of the same status message.
pub const DEFAULT_EDIT_INTERVAL: Duration = Duration::from_secs(1);

/// Wraps the notification sink with per-message rate limiting so that a
/// chatty progress stream is coalesced to at most one edit per interval.
///
/// Timestamps are keyed by message identity and never evicted; with one
/// job at a time the map grows with message volume only.
pub struct StatusReporter {
    sink: Arc<dyn NotificationSink>,
    min_interval: Duration,
    last_edit: Mutex<HashMap<MessageId, Instant>>,
}

impl StatusReporter {
    /// Create a reporter over the given sink.
    pub fn new(sink: Arc<dyn NotificationSink>, min_interval: Duration) -> Self {
        Self {
            sink,
            min_interval,
            last_edit: Mutex::new(HashMap::new()),
        }
    }

    /// Edit the status message to `text`.
    ///
    /// A no-op when there is no status message. Unforced updates inside the
    /// minimum interval since the last successful edit are dropped; `force`
    /// bypasses the throttle. Transport failures never escalate: an
    /// unchanged-content rejection is swallowed, anything else is logged.
    pub async fn update(
        &self,
        chat_id: ChatId,
        message_id: Option<MessageId>,
        text: &str,
        force: bool,
    ) {
        let Some(message_id) = message_id else {
            return;
        };

        let now = Instant::now();
        if !force {
            let last_edit = self.last_edit.lock().expect("reporter mutex poisoned");
            if let Some(last) = last_edit.get(&message_id) {
                if now.duration_since(*last) < self.min_interval {
                    return;
                }
            }
        }

        match self.sink.edit_status(chat_id, message_id, text).await {
            Ok(()) => {
                self.last_edit
                    .lock()
                    .expect("reporter mutex poisoned")
                    .insert(message_id, now);
            }
            Err(e) if e.is_not_modified() => {}
            Err(e) => {
                warn!(message_id = %message_id, "Failed to update status: {}", e);
            }
        }
    }
}
