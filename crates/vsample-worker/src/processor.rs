//! Per-job processing stages.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use vsample_media::fs_utils::remove_file_if_exists;
use vsample_models::{SampleJob, SamplePolicy};

use crate::config::WorkerConfig;
use crate::error::{JobError, JobResult};
use crate::pipeline::{FfmpegPipeline, MediaPipeline, ProgressFn};
use crate::progress::{format_progress_bar, PROGRESS_BAR_SLOTS};
use crate::reporter::StatusReporter;
use crate::sink::NotificationSink;

const MSG_ANALYZING: &str = "📏 Analyzing video...";
const MSG_UPLOADING: &str = "📤 Uploading sample...";
const SAMPLE_CAPTION: &str = "✅ Sample ready | Watermarked preview";

/// Drives one job through probe, window selection, transcode, and delivery,
/// with scratch cleanup on every exit path.
pub struct JobProcessor {
    sink: Arc<dyn NotificationSink>,
    media: Arc<dyn MediaPipeline>,
    reporter: Arc<StatusReporter>,
    policy: SamplePolicy,
}

impl JobProcessor {
    /// Create a processor from its parts.
    pub fn new(
        sink: Arc<dyn NotificationSink>,
        media: Arc<dyn MediaPipeline>,
        reporter: Arc<StatusReporter>,
        policy: SamplePolicy,
    ) -> Self {
        Self {
            sink,
            media,
            reporter,
            policy,
        }
    }

    /// Create a production processor from worker configuration.
    pub fn from_config(config: &WorkerConfig, sink: Arc<dyn NotificationSink>) -> Self {
        let media = Arc::new(FfmpegPipeline::new(config));
        let reporter = Arc::new(StatusReporter::new(
            Arc::clone(&sink),
            config.edit_interval,
        ));
        Self::new(sink, media, reporter, config.policy.clone())
    }

    /// Process a job to completion.
    ///
    /// A failed job reports a terminal status to the requester; either way
    /// the job's scratch files are removed before this returns. Never
    /// returns an error: job failures must not stop the worker loop.
    pub async fn run_job(&self, job: &SampleJob) {
        info!(job_id = %job.id, user_id = %job.user_id, "Processing job");

        match self.process(job).await {
            Ok(()) => info!(job_id = %job.id, "Job completed"),
            Err(err) => {
                error!(job_id = %job.id, "Job failed: {}", err);
                self.reporter
                    .update(job.chat_id, job.status_message_id, &err.user_message(), true)
                    .await;
            }
        }

        debug!(job_id = %job.id, "Cleaning up job files");
        remove_file_if_exists(&job.input_path).await;
        remove_file_if_exists(&job.output_path).await;
    }

    async fn process(&self, job: &SampleJob) -> JobResult<()> {
        // Stage 1: inspect the input
        self.reporter
            .update(job.chat_id, job.status_message_id, MSG_ANALYZING, true)
            .await;

        let video = self
            .media
            .probe(&job.input_path)
            .await
            .map_err(JobError::Probe)?;

        if video.duration <= 0.0 {
            return Err(JobError::InvalidDuration(video.duration));
        }

        info!(
            job_id = %job.id,
            duration = video.duration,
            width = video.width,
            height = video.height,
            "Video inspected"
        );

        // Stage 2: pick the sample window
        let window = self.policy.window(video.duration);
        self.reporter
            .update(
                job.chat_id,
                job.status_message_id,
                &format!("✂️ Cutting {:.0}s sample from middle...", window.length),
                true,
            )
            .await;

        // Stage 3: transcode with live progress. Events cross from the
        // subprocess read loop to the reporter through a channel, so edits
        // keep the callback order and stop before the terminal status.
        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<f64>();

        let forwarder = {
            let reporter = Arc::clone(&self.reporter);
            let chat_id = job.chat_id;
            let status_id = job.status_message_id;
            tokio::spawn(async move {
                while let Some(fraction) = progress_rx.recv().await {
                    let bar = format_progress_bar(fraction, PROGRESS_BAR_SLOTS);
                    reporter
                        .update(
                            chat_id,
                            status_id,
                            &format!("🎬 Processing sample...\n{}", bar),
                            false,
                        )
                        .await;
                }
            })
        };

        let on_progress: ProgressFn = Box::new(move |fraction| {
            let _ = progress_tx.send(fraction);
        });

        let rendered = self
            .media
            .create_sample(
                &job.input_path,
                &job.output_path,
                window,
                video.width,
                video.height,
                on_progress,
            )
            .await;

        // The sender lives inside the callback; once the render returns it
        // is gone and the forwarder drains what is left.
        forwarder
            .await
            .map_err(|e| JobError::Unexpected(e.to_string()))?;
        rendered.map_err(JobError::Transcode)?;

        // Stage 4: deliver the sample
        self.reporter
            .update(job.chat_id, job.status_message_id, MSG_UPLOADING, true)
            .await;

        self.sink
            .deliver_file(job.chat_id, &job.output_path, SAMPLE_CAPTION)
            .await
            .map_err(JobError::Delivery)?;

        if let Some(status_id) = job.status_message_id {
            if let Err(e) = self.sink.delete_message(job.chat_id, status_id).await {
                debug!(job_id = %job.id, "Could not remove status message: {}", e);
            }
        }

        Ok(())
    }
}
