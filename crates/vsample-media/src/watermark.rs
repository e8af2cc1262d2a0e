//! Centered drawtext watermark for sample exports.

use serde::{Deserialize, Serialize};

/// Default watermark text.
pub const DEFAULT_WATERMARK_TEXT: &str = "Sample Preview";
/// Default watermark opacity.
pub const DEFAULT_WATERMARK_OPACITY: f32 = 0.6;

/// Fraction of the smaller frame dimension used as the font size.
const FONT_SCALE: f64 = 0.04;

/// Configuration for the drawtext watermark overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// Overlay text
    pub text: String,
    /// Text opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_WATERMARK_TEXT.to_string(),
            opacity: DEFAULT_WATERMARK_OPACITY,
        }
    }
}

impl WatermarkConfig {
    /// Set the overlay text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the overlay opacity (0.0 = invisible, 1.0 = fully opaque).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Font size scaled to the frame: 4% of the smaller dimension.
    pub fn font_size(width: u32, height: u32) -> u32 {
        (f64::from(width.min(height)) * FONT_SCALE) as u32
    }

    /// Build the FFmpeg drawtext filter for a centered overlay.
    pub fn build_filter(&self, width: u32, height: u32) -> String {
        let font_size = Self::font_size(width, height);
        let text = escape_filter_text(&self.text);

        format!(
            "drawtext=text='{}':fontsize={}:fontcolor=white@{:.1}:\
             borderw=2:bordercolor=black@0.8:x=(w-text_w)/2:y=(h-text_h)/2",
            text, font_size, self.opacity
        )
    }
}

/// Escape characters that terminate or nest drawtext arguments.
fn escape_filter_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace(':', "\\:")
}
