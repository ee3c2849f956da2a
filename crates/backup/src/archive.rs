use std::io::{Cursor, Read, Write};

use serde::Serialize;
use tracing::{info, warn};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::errors::BackupError;
use crate::sink::DownloadSink;
use crate::{BACKUP_ENTRY_NAME, BACKUP_FILE_NAME};

/// Serialize `state` as two-space indented JSON and pack it into a
/// single-entry zip archive.
///
/// Serialization happens before anything is written, so a failure never
/// leaves a partial archive behind.
pub async fn build_backup_archive<T>(state: &T) -> Result<Vec<u8>, BackupError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec_pretty(state)?;
    tokio::task::spawn_blocking(move || write_archive(&json)).await?
}

fn write_archive(json: &[u8]) -> Result<Vec<u8>, BackupError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(BACKUP_ENTRY_NAME, options)?;
    zip.write_all(json).map_err(ZipError::from)?;
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Build the archive for `state` and hand it to `sink` as
/// `trip_explorer_backup.zip`.
///
/// Serialization and archive errors are returned. The save step is
/// fire-and-forget: a failing sink is logged and does not fail the export.
pub async fn export_backup<T, S>(state: &T, sink: &S) -> Result<(), BackupError>
where
    T: Serialize + ?Sized,
    S: DownloadSink + ?Sized,
{
    let blob = build_backup_archive(state).await?;
    let bytes = blob.len();
    match sink.save_as(BACKUP_FILE_NAME, blob).await {
        Ok(()) => info!(file = BACKUP_FILE_NAME, bytes, "backup exported"),
        Err(e) => warn!(file = BACKUP_FILE_NAME, error = %e, "backup download failed"),
    }
    Ok(())
}

/// Open a backup archive and return the JSON state it holds.
pub fn read_backup_archive(bytes: &[u8]) -> Result<serde_json::Value, BackupError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    if archive.len() != 1 {
        return Err(BackupError::InvalidBackup(format!(
            "expected 1 entry, found {}",
            archive.len()
        )));
    }
    let mut entry = archive.by_name(BACKUP_ENTRY_NAME).map_err(|e| match e {
        ZipError::FileNotFound => {
            BackupError::InvalidBackup(format!("missing entry {BACKUP_ENTRY_NAME}"))
        }
        other => BackupError::Archive(other),
    })?;
    let mut text = String::new();
    entry.read_to_string(&mut text).map_err(ZipError::from)?;
    Ok(serde_json::from_str(&text)?)
}
