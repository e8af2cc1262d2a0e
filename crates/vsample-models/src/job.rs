//! Job definitions for queue processing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Unique identifier for a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the user that submitted a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Identity of the delivery channel for outbound messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

/// Identity of a single message within a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A job to produce a watermarked sample clip from one submitted video.
///
/// Immutable once enqueued; the worker only mutates runtime state kept
/// outside the job itself. Scratch paths are derived from the submitting
/// user and message so concurrent submissions never collide on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleJob {
    /// Unique job ID
    pub id: JobId,

    /// Submitting user
    pub user_id: UserId,

    /// Delivery channel for status updates and the finished sample
    pub chat_id: ChatId,

    /// Message that carried the submitted video
    pub message_id: MessageId,

    /// Status message edited in place with progress, if one was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message_id: Option<MessageId>,

    /// Downloaded input file in the scratch directory
    pub input_path: PathBuf,

    /// Sample output file in the scratch directory
    pub output_path: PathBuf,

    /// When the job was created
    pub created_at: DateTime<Utc>,
}

impl SampleJob {
    /// Create a new job with scratch paths derived from the submission.
    pub fn new(
        scratch_dir: impl AsRef<Path>,
        user_id: UserId,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Self {
        let scratch_dir = scratch_dir.as_ref();
        Self {
            id: JobId::new(),
            user_id,
            chat_id,
            message_id,
            status_message_id: None,
            input_path: scratch_dir.join(format!("{}_{}.input", user_id, message_id)),
            output_path: scratch_dir.join(format!("{}_{}.output.mp4", user_id, message_id)),
            created_at: Utc::now(),
        }
    }

    /// Attach the status message created at submission time.
    pub fn with_status_message(mut self, message_id: MessageId) -> Self {
        self.status_message_id = Some(message_id);
        self
    }
}
