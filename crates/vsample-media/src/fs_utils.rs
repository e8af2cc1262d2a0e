//! Scratch-file utilities.
//!
//! Per-job files must disappear on every exit path, so removal here is
//! best-effort: failures are logged, never propagated.

use std::path::Path;
use tokio::fs;
use tracing::{debug, error, info};

use crate::error::MediaResult;

/// Delete a file if it exists, logging failures instead of returning them.
pub async fn remove_file_if_exists(path: impl AsRef<Path>) {
    let path = path.as_ref();

    match fs::remove_file(path).await {
        Ok(()) => debug!(path = %path.display(), "Deleted scratch file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => error!(path = %path.display(), "Failed to delete scratch file: {}", e),
    }
}

/// Remove every regular file from the scratch directory, creating it if
/// needed. Run once at process start; per-file failures are logged and
/// skipped.
pub async fn clear_scratch_dir(dir: impl AsRef<Path>) -> MediaResult<()> {
    let dir = dir.as_ref();

    fs::create_dir_all(dir).await?;

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() {
            remove_file_if_exists(&path).await;
        }
    }

    info!(dir = %dir.display(), "Scratch directory cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_remove_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.input");
        fs::write(&path, b"data").await.unwrap();

        remove_file_if_exists(&path).await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_a_noop() {
        let dir = TempDir::new().unwrap();
        remove_file_if_exists(dir.path().join("absent")).await;
    }

    #[tokio::test]
    async fn test_clear_scratch_dir() {
        let dir = TempDir::new().unwrap();
        let keep = dir.path().join("subdir");
        fs::create_dir(&keep).await.unwrap();
        fs::write(dir.path().join("1_2.input"), b"a").await.unwrap();
        fs::write(dir.path().join("1_2.output.mp4"), b"b").await.unwrap();

        clear_scratch_dir(dir.path()).await.unwrap();

        assert!(!dir.path().join("1_2.input").exists());
        assert!(!dir.path().join("1_2.output.mp4").exists());
        assert!(keep.exists(), "directories are left alone");
    }

    #[tokio::test]
    async fn test_clear_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let scratch = dir.path().join("scratch");

        clear_scratch_dir(&scratch).await.unwrap();
        assert!(scratch.is_dir());
    }
}
