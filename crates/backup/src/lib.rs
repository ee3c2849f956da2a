//! Trip state backup export.
//!
//! A backup is a zip archive with a single pretty-printed JSON entry. Building
//! the archive is async because compression runs on the blocking pool; saving
//! goes through a [`DownloadSink`].

pub mod archive;
pub mod errors;
pub mod sink;

pub use archive::{build_backup_archive, export_backup, read_backup_archive};
pub use errors::BackupError;
pub use sink::{DownloadSink, FileDownloadSink};

/// Name of the single JSON entry inside the archive.
pub const BACKUP_ENTRY_NAME: &str = "trip_explorer_backup.json";
/// File name handed to the download sink.
pub const BACKUP_FILE_NAME: &str = "trip_explorer_backup.zip";

/// Saved application state as captured at export time. The exporter accepts
/// any `Serialize` value; this alias is the shape the app produces.
pub type SavedFeaturesState = serde_json::Map<String, serde_json::Value>;
