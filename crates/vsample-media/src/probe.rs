//! FFprobe video inspection.

use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{MediaError, MediaResult};

/// Video file information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    /// Duration in seconds; 0 when the container reports none
    pub duration: f64,
    /// Width in pixels; 0 when no video stream was found
    pub width: u32,
    /// Height in pixels; 0 when no video stream was found
    pub height: u32,
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Probe a video file for duration and resolution.
pub async fn probe_video(path: impl AsRef<Path>) -> MediaResult<VideoInfo> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)?;

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration:stream=width,height",
            "-of",
            "json",
        ])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        return Err(MediaError::ffprobe_failed(
            "FFprobe failed",
            Some(String::from_utf8_lossy(&output.stderr).to_string()),
        ));
    }

    parse_probe_output(&output.stdout)
}

/// Parse FFprobe JSON into [`VideoInfo`].
///
/// Missing duration maps to 0 (callers treat that as invalid); a file with
/// no video stream yields zero width and height.
fn parse_probe_output(stdout: &[u8]) -> MediaResult<VideoInfo> {
    let probe: FfprobeOutput = serde_json::from_slice(stdout)?;

    let duration = probe
        .format
        .duration
        .as_deref()
        .and_then(|d| d.parse::<f64>().ok())
        .unwrap_or(0.0);

    // First stream that exposes a resolution; audio streams carry none
    let (width, height) = probe
        .streams
        .iter()
        .find_map(|s| Some((s.width?, s.height?)))
        .unwrap_or((0, 0));

    Ok(VideoInfo {
        duration,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_output() {
        let json = br#"{
            "streams": [
                {"width": 1280, "height": 720},
                {}
            ],
            "format": {"duration": "90.041667"}
        }"#;

        let info = parse_probe_output(json).unwrap();
        assert!((info.duration - 90.041667).abs() < 1e-6);
        assert_eq!(info.width, 1280);
        assert_eq!(info.height, 720);
    }

    #[test]
    fn test_parse_audio_only_file() {
        let json = br#"{"streams": [{}], "format": {"duration": "12.5"}}"#;

        let info = parse_probe_output(json).unwrap();
        assert_eq!(info.width, 0);
        assert_eq!(info.height, 0);
        assert!((info.duration - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_missing_duration_defaults_to_zero() {
        let json = br#"{"streams": [{"width": 640, "height": 480}], "format": {}}"#;

        let info = parse_probe_output(json).unwrap();
        assert_eq!(info.duration, 0.0);
    }

    #[test]
    fn test_parse_malformed_output_is_an_error() {
        assert!(parse_probe_output(b"not json").is_err());
    }

    #[tokio::test]
    async fn test_probe_missing_file() {
        let err = probe_video("/nonexistent/video.mp4").await.unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }
}
