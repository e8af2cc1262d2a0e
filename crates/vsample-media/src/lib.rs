//! FFmpeg CLI wrapper for sample-clip creation.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - Progress parsing from `-progress pipe:1`
//! - FFprobe-based video inspection
//! - Watermarked sample rendering with a progress callback
//! - Scratch-file utilities with best-effort cleanup

pub mod command;
pub mod error;
pub mod fs_utils;
pub mod probe;
pub mod progress;
pub mod sample;
pub mod watermark;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use fs_utils::{clear_scratch_dir, remove_file_if_exists};
pub use probe::{probe_video, VideoInfo};
pub use progress::FfmpegProgress;
pub use sample::create_sample;
pub use watermark::WatermarkConfig;
