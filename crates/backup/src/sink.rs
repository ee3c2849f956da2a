use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::BackupError;

/// Destination for a finished archive blob; the native stand-in for a
/// browser "save as" download.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn save_as(&self, file_name: &str, blob: Vec<u8>) -> Result<(), BackupError>;
}

/// Saves blobs as files inside a target directory.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path a blob named `file_name` would be written to.
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[async_trait]
impl DownloadSink for FileDownloadSink {
    async fn save_as(&self, file_name: &str, blob: Vec<u8>) -> Result<(), BackupError> {
        let path = self.target_path(file_name);
        common::env::ensure_dir(&self.dir)
            .await
            .map_err(|e| BackupError::save(&path, e))?;
        tokio::fs::write(&path, &blob)
            .await
            .map_err(|e| BackupError::save(&path, e))?;
        debug!(path = %path.display(), bytes = blob.len(), "backup written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_into_missing_dir() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let sink = FileDownloadSink::new(tmp.path().join("exports"));
        sink.save_as("out.zip", vec![1, 2, 3]).await?;
        let written = tokio::fs::read(sink.target_path("out.zip")).await?;
        assert_eq!(written, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn overwrites_existing_file() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let sink = FileDownloadSink::new(tmp.path());
        sink.save_as("out.zip", vec![1; 64]).await?;
        sink.save_as("out.zip", vec![2; 8]).await?;
        assert_eq!(tokio::fs::read(sink.target_path("out.zip")).await?, vec![2; 8]);
        Ok(())
    }

    #[tokio::test]
    async fn dir_that_is_a_file_fails() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let blocker = tmp.path().join("blocker");
        tokio::fs::write(&blocker, b"x").await?;
        let sink = FileDownloadSink::new(blocker.join("nested"));
        let err = sink.save_as("out.zip", vec![0]).await.unwrap_err();
        assert!(matches!(err, BackupError::Save { .. }));
        Ok(())
    }
}
