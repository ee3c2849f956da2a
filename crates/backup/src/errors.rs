use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("state is not JSON-serializable: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("invalid backup: {0}")]
    InvalidBackup(String),
    #[error("failed to save {}: {reason}", path.display())]
    Save { path: PathBuf, reason: String },
}

impl BackupError {
    pub fn save(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Save { path: path.into(), reason: reason.to_string() }
    }
}
