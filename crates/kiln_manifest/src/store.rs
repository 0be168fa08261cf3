//! On-disk manifest document.

use crate::{ManifestEntry, write_atomic};
use kiln_error::{JsonError, KilnResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A JSON array of [`ManifestEntry`] stored at a fixed path.
///
/// The store assumes a single writer: `upsert` is a read-modify-write of the
/// whole document.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    /// Creates a store for the manifest at `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Manifest location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries in stored order.
    ///
    /// A missing manifest is an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or does not hold a
    /// valid entry array.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> KilnResult<Vec<ManifestEntry>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No manifest yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::Read {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                })
                .into());
            }
        };

        let entries: Vec<ManifestEntry> = serde_json::from_str(&raw).map_err(|e| {
            StorageError::new(StorageErrorKind::CorruptManifest {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        debug!(count = entries.len(), "Manifest loaded");
        Ok(entries)
    }

    /// Inserts `entry`, replacing any entry with the same name in place.
    ///
    /// New names are appended; the relative order of other entries is kept.
    /// Returns the entries as written.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing manifest cannot be loaded or the new
    /// document cannot be written.
    #[instrument(skip(self, entry), fields(path = %self.path.display(), name = %entry.name()))]
    pub async fn upsert(&self, entry: ManifestEntry) -> KilnResult<Vec<ManifestEntry>> {
        let mut entries = self.load().await?;

        match entries.iter_mut().find(|e| e.name() == entry.name()) {
            Some(existing) => {
                debug!("Replacing existing entry");
                *existing = entry;
            }
            None => entries.push(entry),
        }

        let json = serde_json::to_string_pretty(&entries).map_err(|e| JsonError::new(e.to_string()))?;
        write_atomic(&self.path, json.as_bytes()).await?;

        info!(count = entries.len(), "Manifest updated");
        Ok(entries)
    }

    /// Alias for [`ManifestStore::load`].
    pub async fn entries(&self) -> KilnResult<Vec<ManifestEntry>> {
        self.load().await
    }
}
