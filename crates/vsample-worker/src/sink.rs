//! Outbound transport boundary.
//!
//! The chat transport that carries status messages and finished samples is
//! an external collaborator; the pipeline only sees this trait.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use vsample_models::{ChatId, MessageId};

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors reported by the outbound transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The edit would leave the message unchanged. Expected under edit-rate
    /// saturation and swallowed by the reporter.
    #[error("message is not modified")]
    NotModified,

    #[error("transport rejected request: {0}")]
    Rejected(String),

    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// True when the failure only says the content did not change.
    pub fn is_not_modified(&self) -> bool {
        matches!(self, TransportError::NotModified)
    }
}

/// Outbound message and file delivery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Create a fresh status message and return its identity.
    async fn send_status(&self, chat_id: ChatId, text: &str) -> TransportResult<MessageId>;

    /// Edit an existing status message in place.
    async fn edit_status(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
    ) -> TransportResult<()>;

    /// Remove a message.
    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> TransportResult<()>;

    /// Deliver a finished file with a caption.
    async fn deliver_file(
        &self,
        chat_id: ChatId,
        path: &Path,
        caption: &str,
    ) -> TransportResult<()>;
}
