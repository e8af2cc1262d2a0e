//! Shared data models for the vsample pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Jobs and their chat/message identities
//! - Sample window selection
//! - Encoding configuration and bitrate tiers

pub mod encoding;
pub mod job;
pub mod sample;
pub mod utils;

// Re-export common types
pub use encoding::{bitrate_for_resolution, EncodingConfig};
pub use job::{ChatId, JobId, MessageId, SampleJob, UserId};
pub use sample::{SamplePolicy, SampleWindow};
pub use utils::is_supported_extension;
