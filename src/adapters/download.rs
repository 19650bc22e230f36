//! Delivery of exported files
//!
//! A download is complete only when the whole file is in place. Bytes are
//! staged in a temporary file inside the destination directory and renamed
//! onto the final name, so a failed delivery never leaves a partial file.

use crate::domain::{KhioneError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Destination for finished export artifacts
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Store `bytes` under `filename` and return where it landed
    ///
    /// # Errors
    ///
    /// Returns an error for names containing path components or when the
    /// file cannot be written.
    async fn deliver(&self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf>;
}

/// Writes downloads into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl DownloadSink for DirectorySink {
    async fn deliver(&self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        validate_filename(filename)?;

        let directory = self.directory.clone();
        let target = directory.join(filename);
        let size = bytes.len();

        let written = tokio::task::spawn_blocking(move || write_atomically(&directory, &target, &bytes))
            .await
            .map_err(|e| KhioneError::Io(format!("Download task failed: {e}")))??;

        tracing::debug!(path = %written.display(), size, "Download stored");
        Ok(written)
    }
}

fn write_atomically(directory: &Path, target: &Path, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;

    let mut staged = NamedTempFile::new_in(directory)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;

    // Persisting closes the staging handle
    staged
        .persist(target)
        .map_err(|e| KhioneError::Io(format!("Failed to store {}: {}", target.display(), e.error)))?;

    Ok(target.to_path_buf())
}

fn validate_filename(filename: &str) -> Result<()> {
    let path = Path::new(filename);
    let is_plain = !filename.is_empty()
        && path.file_name().and_then(|n| n.to_str()) == Some(filename);
    if is_plain {
        Ok(())
    } else {
        Err(KhioneError::Validation(format!(
            "Download name must be a plain file name: {filename}"
        )))
    }
}
