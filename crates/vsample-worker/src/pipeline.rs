//! Media operations behind a trait so the processor can be tested without
//! the external tools.

use async_trait::async_trait;
use std::path::Path;

use vsample_media::{create_sample, probe_video, FfmpegRunner, MediaResult, VideoInfo, WatermarkConfig};
use vsample_models::{EncodingConfig, SampleWindow};

use crate::config::WorkerConfig;

/// Fractional progress callback handed into a sample render.
pub type ProgressFn = Box<dyn FnMut(f64) + Send + 'static>;

/// Probe and transcode operations used by the processor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaPipeline: Send + Sync {
    /// Inspect an input file.
    async fn probe(&self, input: &Path) -> MediaResult<VideoInfo>;

    /// Render the watermarked sample for one job.
    async fn create_sample(
        &self,
        input: &Path,
        output: &Path,
        window: SampleWindow,
        width: u32,
        height: u32,
        on_progress: ProgressFn,
    ) -> MediaResult<()>;
}

/// Production pipeline invoking the external ffprobe/ffmpeg binaries.
pub struct FfmpegPipeline {
    encoding: EncodingConfig,
    watermark: WatermarkConfig,
    runner: FfmpegRunner,
}

impl FfmpegPipeline {
    /// Build the pipeline from worker configuration.
    pub fn new(config: &WorkerConfig) -> Self {
        let mut runner = FfmpegRunner::new();
        if let Some(timeout) = config.ffmpeg_timeout {
            runner = runner.with_timeout(timeout.as_secs());
        }

        Self {
            encoding: config.encoding.clone(),
            watermark: config.watermark.clone(),
            runner,
        }
    }
}

#[async_trait]
impl MediaPipeline for FfmpegPipeline {
    async fn probe(&self, input: &Path) -> MediaResult<VideoInfo> {
        probe_video(input).await
    }

    async fn create_sample(
        &self,
        input: &Path,
        output: &Path,
        window: SampleWindow,
        width: u32,
        height: u32,
        on_progress: ProgressFn,
    ) -> MediaResult<()> {
        create_sample(
            input,
            output,
            &window,
            width,
            height,
            &self.encoding,
            &self.watermark,
            &self.runner,
            on_progress,
        )
        .await
    }
}
