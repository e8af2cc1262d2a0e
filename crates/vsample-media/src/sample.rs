//! Watermarked sample rendering.

use std::path::Path;
use tracing::info;

use vsample_models::{bitrate_for_resolution, EncodingConfig, SampleWindow};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::watermark::WatermarkConfig;

/// Minimum fractional advance between progress callback invocations.
///
/// FFmpeg emits a progress block several times per second; coalescing here
/// bounds callback frequency independent of subprocess chattiness.
pub const PROGRESS_STEP: f64 = 0.05;

/// Build the FFmpeg command for one sample render.
pub fn build_sample_command(
    input: &Path,
    output: &Path,
    window: &SampleWindow,
    width: u32,
    height: u32,
    encoding: &EncodingConfig,
    watermark: &WatermarkConfig,
) -> FfmpegCommand {
    FfmpegCommand::new(input, output)
        .seek(window.start)
        .limit(window.length)
        .video_filter(watermark.build_filter(width, height))
        .output_args(encoding.to_ffmpeg_args())
        .video_bitrate(bitrate_for_resolution(width, height))
        .output_arg("-movflags")
        .output_arg("+faststart")
}

/// Cut a watermarked sample out of `input` and write it to `output`.
///
/// `on_progress` receives fractional completion values in `[0, 1]`, strictly
/// increasing, at most once per [`PROGRESS_STEP`] of advance, and never after
/// this function returns. Success requires both a clean FFmpeg exit and the
/// output file existing afterwards.
pub async fn create_sample<F>(
    input: &Path,
    output: &Path,
    window: &SampleWindow,
    width: u32,
    height: u32,
    encoding: &EncodingConfig,
    watermark: &WatermarkConfig,
    runner: &FfmpegRunner,
    mut on_progress: F,
) -> MediaResult<()>
where
    F: FnMut(f64) + Send + 'static,
{
    info!(
        input = %input.display(),
        output = %output.display(),
        start = window.start,
        length = window.length,
        "Creating sample"
    );

    let cmd = build_sample_command(input, output, window, width, height, encoding, watermark);

    let length = window.length;
    let mut last_reported = 0.0f64;

    runner
        .run_with_progress(&cmd, move |progress| {
            let fraction = progress.fraction(length);
            if fraction - last_reported >= PROGRESS_STEP {
                on_progress(fraction);
                last_reported = fraction;
            }
        })
        .await?;

    if !output.exists() {
        return Err(MediaError::OutputMissing(output.to_path_buf()));
    }

    info!(output = %output.display(), "Sample created");
    Ok(())
}
