//! Sample window selection.

use serde::{Deserialize, Serialize};

/// Videos longer than this threshold get the long sample length (seconds).
pub const LONG_VIDEO_THRESHOLD: f64 = 120.0;
/// Sample length for long videos (seconds).
pub const LONG_VIDEO_SAMPLE: f64 = 30.0;
/// Sample length for everything else (seconds).
pub const SHORT_VIDEO_SAMPLE: f64 = 10.0;

/// The slice of the source video selected for sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleWindow {
    /// Start offset in seconds
    pub start: f64,
    /// Length in seconds
    pub length: f64,
}

/// Duration-threshold policy mapping a source duration to a sample window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePolicy {
    /// Durations above this get the long sample
    pub long_threshold: f64,
    /// Sample length for long videos
    pub long_sample: f64,
    /// Sample length for short videos
    pub short_sample: f64,
}

impl Default for SamplePolicy {
    fn default() -> Self {
        Self {
            long_threshold: LONG_VIDEO_THRESHOLD,
            long_sample: LONG_VIDEO_SAMPLE,
            short_sample: SHORT_VIDEO_SAMPLE,
        }
    }
}

impl SamplePolicy {
    /// Compute the sample window for a source duration.
    ///
    /// The sample is centered in the source, clamped so the start offset
    /// never goes negative for inputs shorter than the sample length.
    pub fn window(&self, duration: f64) -> SampleWindow {
        let length = if duration > self.long_threshold {
            self.long_sample
        } else {
            self.short_sample
        };

        let start = (duration / 2.0 - length / 2.0).max(0.0);

        SampleWindow { start, length }
    }
}
