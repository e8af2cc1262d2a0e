//! Single-worker sample processing pipeline.
//!
//! This crate wires the queue, the media layer, and the outbound transport
//! into the per-job pipeline: probe, window selection, watermarked
//! transcode with live progress, delivery, and unconditional scratch
//! cleanup. The chat transport itself is an external collaborator behind
//! the [`NotificationSink`] trait.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod progress;
pub mod reporter;
pub mod sink;
pub mod worker;

pub use config::WorkerConfig;
pub use error::{JobError, JobResult};
pub use pipeline::{FfmpegPipeline, MediaPipeline, ProgressFn};
pub use processor::JobProcessor;
pub use progress::{format_progress_bar, PROGRESS_BAR_SLOTS};
pub use reporter::StatusReporter;
pub use sink::{NotificationSink, TransportError, TransportResult};
pub use worker::Worker;
