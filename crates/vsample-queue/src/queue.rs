//! FIFO queue with a current-job slot.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::Notify;
use tracing::{debug, info};

use vsample_models::{JobId, SampleJob};

#[derive(Debug, Default)]
struct QueueState {
    pending: VecDeque<SampleJob>,
    current: Option<JobId>,
}

/// FIFO job queue shared between the submission boundary and the worker.
///
/// Enqueue may race with the worker's dequeue; both go through one mutex.
/// The queue holds no completed jobs: a dequeued job lives only in the
/// current-job slot until [`JobQueue::finish`] clears it.
#[derive(Debug, Default)]
pub struct JobQueue {
    state: Mutex<QueueState>,
    notify: Notify,
}

impl JobQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a job to the tail and return its 1-based position among the
    /// jobs waiting.
    pub fn enqueue(&self, job: SampleJob) -> usize {
        let position = {
            let mut state = self.state.lock().expect("queue mutex poisoned");
            state.pending.push_back(job);
            state.pending.len()
        };

        info!(position, "Job added to queue");
        self.notify.notify_one();
        position
    }

    /// Number of jobs waiting, not counting one currently being processed.
    pub fn len(&self) -> usize {
        self.state.lock().expect("queue mutex poisoned").pending.len()
    }

    /// True when the queue holds no waiting jobs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True exactly while a job occupies the current-job slot.
    pub fn is_processing(&self) -> bool {
        self.state
            .lock()
            .expect("queue mutex poisoned")
            .current
            .is_some()
    }

    /// Wait for the next job, move it into the current-job slot, and return
    /// it. Intended for the single worker; blocks until a job is available.
    pub async fn next_job(&self) -> SampleJob {
        loop {
            if let Some(job) = self.try_next() {
                return job;
            }
            self.notify.notified().await;
        }
    }

    /// Clear the current-job slot after processing finishes, whatever the
    /// outcome.
    pub fn finish(&self) {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        if let Some(id) = state.current.take() {
            debug!(job_id = %id, "Cleared current job slot");
        }
    }

    fn try_next(&self) -> Option<SampleJob> {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        let job = state.pending.pop_front()?;
        state.current = Some(job.id.clone());
        Some(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vsample_models::{ChatId, MessageId, UserId};

    fn job(n: i64) -> SampleJob {
        SampleJob::new("/tmp/vsample", UserId(1), ChatId(1), MessageId(n))
    }

    #[test]
    fn enqueue_returns_one_based_positions() {
        let queue = JobQueue::new();
        for n in 1..=5 {
            assert_eq!(queue.enqueue(job(n)), n as usize);
        }
        assert_eq!(queue.len(), 5);
    }

    #[tokio::test]
    async fn jobs_are_drained_in_submission_order() {
        let queue = JobQueue::new();
        queue.enqueue(job(1));
        queue.enqueue(job(2));
        queue.enqueue(job(3));

        for expected in 1..=3 {
            let job = queue.next_job().await;
            assert_eq!(job.message_id, MessageId(expected));
            assert!(queue.is_processing());
            queue.finish();
        }

        assert_eq!(queue.len(), 0);
        assert!(!queue.is_processing());
    }

    #[tokio::test]
    async fn dequeued_job_is_not_counted_as_waiting() {
        let queue = JobQueue::new();
        queue.enqueue(job(1));
        queue.enqueue(job(2));

        let _current = queue.next_job().await;
        assert_eq!(queue.len(), 1);
        assert!(queue.is_processing());
    }

    #[tokio::test]
    async fn next_job_waits_for_a_submission() {
        let queue = Arc::new(JobQueue::new());

        let waiter = {
            let queue = Arc::clone(&queue);
            tokio::spawn(async move { queue.next_job().await })
        };

        // Give the waiter a chance to park before submitting
        tokio::task::yield_now().await;
        queue.enqueue(job(7));

        let got = waiter.await.unwrap();
        assert_eq!(got.message_id, MessageId(7));
    }

    #[tokio::test]
    async fn concurrent_enqueues_cover_all_positions() {
        let queue = Arc::new(JobQueue::new());

        let mut handles = Vec::new();
        for n in 0..16 {
            let queue = Arc::clone(&queue);
            handles.push(tokio::spawn(async move { queue.enqueue(job(n)) }));
        }

        let mut positions: Vec<usize> = Vec::new();
        for handle in handles {
            positions.push(handle.await.unwrap());
        }
        positions.sort_unstable();

        assert_eq!(positions, (1..=16).collect::<Vec<_>>());
        assert_eq!(queue.len(), 16);
    }
}
