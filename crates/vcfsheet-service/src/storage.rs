//! Filesystem helpers for the upload, temp and download directories.

use std::path::{Path, PathBuf};

use vcfsheet_core::config::StorageConfig;

use crate::error::{ServiceError, ServiceResult};

/// Stem used when a sanitized filename has nothing before its extension.
const FALLBACK_STEM: &str = "contacts";

/// ## Summary
/// Reduces a client-supplied filename to a safe single path component.
///
/// ASCII alphanumerics, `.`, `-` and `_` are kept, every other character
/// becomes `_`, and leading dots are removed.
///
/// ## Errors
/// Returns `ServiceError::InvalidFilename` if nothing usable is left.
pub fn sanitize_filename(raw: &str) -> ServiceResult<String> {
    let replaced: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = replaced.trim_start_matches('.');
    if cleaned.is_empty() {
        return Err(ServiceError::InvalidFilename(raw.to_string()));
    }

    Ok(cleaned.to_string())
}

/// Filename without its last extension.
#[must_use]
pub fn file_stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        Some(_) => FALLBACK_STEM,
        None => filename,
    }
}

/// Joins an already sanitized filename onto `dir`.
#[must_use]
pub fn path_in(dir: &Path, filename: &str) -> PathBuf {
    dir.join(filename)
}

/// ## Summary
/// Creates the upload, download and temp directories if missing.
///
/// ## Errors
/// Returns an error if any directory cannot be created.
pub async fn ensure_dirs(storage: &StorageConfig) -> ServiceResult<()> {
    for dir in [&storage.upload_dir, &storage.download_dir, &storage.temp_dir] {
        tokio::fs::create_dir_all(dir).await?;
        tracing::debug!(dir = %dir.display(), "Storage directory ready");
    }
    Ok(())
}

/// ## Summary
/// Resolves a requested download to a path in the download directory.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no such file exists.
#[tracing::instrument(skip(storage))]
pub async fn resolve_download(storage: &StorageConfig, filename: &str) -> ServiceResult<PathBuf> {
    let safe = sanitize_filename(filename).map_err(|_err| ServiceError::NotFound(filename.to_string()))?;
    let path = path_in(&storage.download_dir, &safe);

    if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
        Ok(path)
    } else {
        tracing::warn!(path = %path.display(), "Requested download does not exist");
        Err(ServiceError::NotFound(safe))
    }
}
