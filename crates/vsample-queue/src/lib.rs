//! In-process FIFO job queue.
//!
//! Submissions land at the tail, the single worker drains from the head,
//! and exactly one job occupies the current-job slot while it is being
//! processed.

pub mod queue;

pub use queue::JobQueue;
