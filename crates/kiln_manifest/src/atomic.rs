//! Write-then-rename file replacement.

use kiln_error::{KilnResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Replaces `path` with `contents` so readers never observe a partial file.
///
/// Parent directories are created as needed. The data is written to a sibling
/// temporary file which is then renamed over the target.
///
/// # Errors
///
/// Returns a storage error if the directory, the temporary file or the rename
/// fails. The temporary file is removed on a failed rename.
#[instrument(skip_all, fields(path = %path.display(), bytes = contents.len()))]
pub async fn write_atomic(path: &Path, contents: &[u8]) -> KilnResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::new(StorageErrorKind::CreateDir {
                path: parent.display().to_string(),
                message: e.to_string(),
            })
        })?;
    }

    let temp_path = temp_sibling(path);
    tokio::fs::write(&temp_path, contents).await.map_err(|e| {
        StorageError::new(StorageErrorKind::Write {
            path: temp_path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(StorageError::new(StorageErrorKind::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .into());
    }

    debug!("File replaced");
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
