//! Small shared helpers.

use std::path::Path;

/// Container extensions accepted at the submission boundary.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "avi", "mov", "flv", "m4v"];

/// Check whether a submitted filename has a supported container extension.
pub fn is_supported_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_extensions() {
        assert!(is_supported_extension("movie.mp4"));
        assert!(is_supported_extension("movie.MKV"));
        assert!(is_supported_extension("dir/movie.webm"));
    }

    #[test]
    fn rejects_unsupported_or_missing_extensions() {
        assert!(!is_supported_extension("movie.gif"));
        assert!(!is_supported_extension("movie"));
        assert!(!is_supported_extension(""));
    }
}
