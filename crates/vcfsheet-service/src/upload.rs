//! Upload ingestion: store, parse, and open a session.

use std::path::PathBuf;

use uuid::Uuid;
use vcfsheet_core::config::StorageConfig;
use vcfsheet_rfc::rfc::vcard::{ParsedDocument, parse_document};

use crate::error::ServiceResult;
use crate::session::{SessionData, SessionStore};
use crate::storage::{path_in, sanitize_filename};

/// A successfully ingested upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub session_id: Uuid,
    pub data: SessionData,
}

/// ## Summary
/// Ingests one uploaded VCF file.
///
/// The raw bytes are saved to the upload directory under a per-request name,
/// read back and parsed on a blocking worker, and the result is parked as a
/// session in the temp directory. The saved file is removed again whether or
/// not parsing succeeded.
///
/// ## Errors
/// Returns `ServiceError::InvalidFilename` for unusable names,
/// `RfcError::Decode` for undecodable input, `RfcError::NoVCardsFound` or
/// `RfcError::NoContacts` when nothing usable was found, and I/O errors from
/// the storage directories.
#[tracing::instrument(skip(storage, body), fields(bytes = body.len()))]
pub async fn ingest_upload(
    storage: &StorageConfig,
    filename: &str,
    body: Vec<u8>,
) -> ServiceResult<UploadOutcome> {
    let filename = sanitize_filename(filename)?;
    let upload_path = path_in(&storage.upload_dir, &format!("{}_{filename}", Uuid::new_v4()));

    tokio::fs::write(&upload_path, body).await?;
    tracing::info!(path = %upload_path.display(), "File saved");

    let parsed = parse_saved(upload_path.clone()).await;

    if let Err(e) = tokio::fs::remove_file(&upload_path).await {
        tracing::warn!(error = %e, path = %upload_path.display(), "Failed to remove uploaded file");
    }

    let doc = parsed?.require_contacts()?;
    if !doc.diagnostics.is_empty() {
        tracing::debug!(skipped = doc.diagnostics.len(), "Some vCard content was skipped");
    }

    let data = SessionData::from_document(filename, doc);
    let session_id = SessionStore::new(&storage.temp_dir).create(&data).await?;

    tracing::info!(contacts = data.contacts.len(), "Successfully processed contacts");

    Ok(UploadOutcome { session_id, data })
}

/// Reads a saved upload back and parses it on a blocking worker.
async fn parse_saved(path: PathBuf) -> ServiceResult<ParsedDocument> {
    tokio::task::spawn_blocking(move || -> ServiceResult<ParsedDocument> {
        let bytes = std::fs::read(&path)?;
        Ok(parse_document(&bytes)?)
    })
    .await?
}
