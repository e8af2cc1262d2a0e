//! Worker configuration.

use std::path::PathBuf;
use std::time::Duration;

use vsample_media::WatermarkConfig;
use vsample_models::{EncodingConfig, SamplePolicy};

/// Worker configuration.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Scratch directory holding per-job input/output files
    pub scratch_dir: PathBuf,
    /// Minimum interval between edits of one status message
    pub edit_interval: Duration,
    /// Deadline for the transcoding subprocess; `None` lets it run
    /// unbounded, stalling the queue if it hangs
    pub ffmpeg_timeout: Option<Duration>,
    /// Sample window selection policy
    pub policy: SamplePolicy,
    /// Encoder settings
    pub encoding: EncodingConfig,
    /// Watermark overlay settings
    pub watermark: WatermarkConfig,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("/tmp/vsample"),
            edit_interval: Duration::from_secs(1),
            ffmpeg_timeout: None,
            policy: SamplePolicy::default(),
            encoding: EncodingConfig::default(),
            watermark: WatermarkConfig::default(),
        }
    }
}

impl WorkerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut watermark = defaults.watermark;
        if let Ok(text) = std::env::var("VSAMPLE_WATERMARK_TEXT") {
            watermark = watermark.with_text(text);
        }
        if let Some(opacity) = std::env::var("VSAMPLE_WATERMARK_OPACITY")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            watermark = watermark.with_opacity(opacity);
        }

        let mut encoding = defaults.encoding;
        if let Ok(preset) = std::env::var("VSAMPLE_FFMPEG_PRESET") {
            encoding.preset = preset;
        }
        if let Some(crf) = std::env::var("VSAMPLE_FFMPEG_CRF")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            encoding.crf = crf;
        }

        Self {
            scratch_dir: std::env::var("VSAMPLE_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.scratch_dir),
            edit_interval: Duration::from_millis(
                std::env::var("VSAMPLE_EDIT_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
            ffmpeg_timeout: std::env::var("VSAMPLE_FFMPEG_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
            policy: defaults.policy,
            encoding,
            watermark,
        }
    }
}
