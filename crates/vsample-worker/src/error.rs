//! Per-job failure categories.
//!
//! Every category is recovered at the job boundary: logged, surfaced to the
//! requester as a short message, and followed by cleanup. None of them stop
//! the worker loop.

use thiserror::Error;

use crate::sink::TransportError;
use vsample_media::MediaError;

/// Result type for one job's processing.
pub type JobResult<T> = Result<T, JobError>;

/// Maximum characters of error detail surfaced to the requester.
const USER_MESSAGE_DETAIL_CHARS: usize = 100;

/// Why a job failed.
#[derive(Debug, Error)]
pub enum JobError {
    /// The container reported a zero or negative duration.
    #[error("invalid video duration: {0}")]
    InvalidDuration(f64),

    /// Inspection tool failed or produced unusable output.
    #[error("probe failed: {0}")]
    Probe(#[source] MediaError),

    /// Transcoding tool failed or left no output file.
    #[error("transcode failed: {0}")]
    Transcode(#[source] MediaError),

    /// The transport rejected the outbound file.
    #[error("delivery failed: {0}")]
    Delivery(#[source] TransportError),

    /// Anything else raised mid-stage.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl JobError {
    /// Short human-readable message shown to the requester.
    pub fn user_message(&self) -> String {
        match self {
            JobError::InvalidDuration(_) => "❌ Invalid video duration detected.".to_string(),
            JobError::Probe(_) => "❌ Failed to analyze video. File may be corrupted.".to_string(),
            JobError::Transcode(_) => "❌ Failed to create sample. FFmpeg error.".to_string(),
            JobError::Delivery(e) => {
                format!(
                    "❌ Processing failed: {}",
                    truncate_chars(&e.to_string(), USER_MESSAGE_DETAIL_CHARS)
                )
            }
            JobError::Unexpected(msg) => {
                format!(
                    "❌ Processing failed: {}",
                    truncate_chars(msg, USER_MESSAGE_DETAIL_CHARS)
                )
            }
        }
    }
}

/// Truncate to at most `max_chars` characters on a char boundary.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
