//! Sequential worker loop.

use std::sync::Arc;

use tracing::{info, Instrument};

use vsample_queue::JobQueue;

use crate::processor::JobProcessor;

/// Pulls jobs off the queue one at a time and runs each through the
/// processor. Job failures are reported to the requester and never stop
/// the loop.
pub struct Worker {
    queue: Arc<JobQueue>,
    processor: JobProcessor,
}

impl Worker {
    /// Create a worker over a queue and processor.
    pub fn new(queue: Arc<JobQueue>, processor: JobProcessor) -> Self {
        Self { queue, processor }
    }

    /// Run the worker loop. Never returns; spawn it and abort the task on
    /// shutdown.
    pub async fn run(&self) {
        info!("Worker started");

        loop {
            let job = self.queue.next_job().await;

            let span = tracing::info_span!(
                "job",
                job_id = %job.id,
                user_id = %job.user_id,
            );
            self.processor.run_job(&job).instrument(span).await;

            self.queue.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    use crate::pipeline::{MediaPipeline, ProgressFn};
    use crate::reporter::StatusReporter;
    use crate::sink::{NotificationSink, TransportResult};
    use vsample_media::{MediaResult, VideoInfo};
    use vsample_models::{
        ChatId, MessageId, SampleJob, SamplePolicy, SampleWindow, UserId,
    };

    /// Sink that records delivered file paths.
    struct RecordingSink {
        deliveries: mpsc::UnboundedSender<std::path::PathBuf>,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn send_status(&self, _chat_id: ChatId, _text: &str) -> TransportResult<MessageId> {
            Ok(MessageId(1))
        }

        async fn edit_status(
            &self,
            _chat_id: ChatId,
            _message_id: MessageId,
            _text: &str,
        ) -> TransportResult<()> {
            Ok(())
        }

        async fn delete_message(
            &self,
            _chat_id: ChatId,
            _message_id: MessageId,
        ) -> TransportResult<()> {
            Ok(())
        }

        async fn deliver_file(
            &self,
            _chat_id: ChatId,
            path: &Path,
            _caption: &str,
        ) -> TransportResult<()> {
            self.deliveries.send(path.to_path_buf()).unwrap();
            Ok(())
        }
    }

    /// Pipeline that reports a fixed video and writes the output file.
    struct StubPipeline;

    #[async_trait]
    impl MediaPipeline for StubPipeline {
        async fn probe(&self, _input: &Path) -> MediaResult<VideoInfo> {
            Ok(VideoInfo {
                duration: 60.0,
                width: 1280,
                height: 720,
            })
        }

        async fn create_sample(
            &self,
            _input: &Path,
            output: &Path,
            _window: SampleWindow,
            _width: u32,
            _height: u32,
            _on_progress: ProgressFn,
        ) -> MediaResult<()> {
            tokio::fs::write(output, b"sample bytes").await?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn jobs_run_in_submission_order_and_drain_the_queue() {
        let dir = TempDir::new().unwrap();
        let (tx, mut deliveries) = mpsc::unbounded_channel();

        let sink: Arc<dyn NotificationSink> = Arc::new(RecordingSink { deliveries: tx });
        let reporter = Arc::new(StatusReporter::new(Arc::clone(&sink), Duration::ZERO));
        let processor = JobProcessor::new(
            sink,
            Arc::new(StubPipeline),
            reporter,
            SamplePolicy::default(),
        );

        let queue = Arc::new(JobQueue::new());
        let first = SampleJob::new(dir.path(), UserId(1), ChatId(1), MessageId(100))
            .with_status_message(MessageId(101));
        let second = SampleJob::new(dir.path(), UserId(2), ChatId(2), MessageId(200))
            .with_status_message(MessageId(201));
        std::fs::write(&first.input_path, b"a").unwrap();
        std::fs::write(&second.input_path, b"b").unwrap();

        let first_output = first.output_path.clone();
        let second_output = second.output_path.clone();
        assert_eq!(queue.enqueue(first), 1);
        assert_eq!(queue.enqueue(second), 2);

        let worker_queue = Arc::clone(&queue);
        let handle = tokio::spawn(async move {
            Worker::new(worker_queue, processor).run().await;
        });

        assert_eq!(deliveries.recv().await.unwrap(), first_output);
        assert_eq!(deliveries.recv().await.unwrap(), second_output);

        // Delivery happens before cleanup; wait for the worker to go idle
        // before inspecting the scratch files.
        while queue.is_processing() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        handle.abort();

        assert!(queue.is_empty());
        assert!(!first_output.exists());
        assert!(!second_output.exists());
    }
}
