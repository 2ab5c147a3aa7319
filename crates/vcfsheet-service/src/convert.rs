//! Session to spreadsheet conversion.

use vcfsheet_core::config::StorageConfig;
use vcfsheet_core::constants::EXPORT_EXTENSION;

use crate::error::{ServiceError, ServiceResult};
use crate::export::{build_rows, to_xlsx_bytes};
use crate::session::SessionStore;
use crate::storage::{file_stem, path_in};

/// A finished export, ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub export_filename: String,
    pub records_count: usize,
}

/// ## Summary
/// Exports a session's contacts to the workbook `<download_dir>/<stem>.xlsx`
/// and closes the session.
///
/// An empty `selected_fields` exports every field.
///
/// ## Errors
/// Returns `ServiceError::SessionNotFound` for unknown sessions,
/// `ServiceError::EmptySession` if the session has no contacts, and I/O or
/// spreadsheet errors from writing the export.
#[tracing::instrument(skip(storage, selected_fields), fields(selected = selected_fields.len()))]
pub async fn convert_session(
    storage: &StorageConfig,
    session_id: &str,
    selected_fields: &[String],
) -> ServiceResult<ConvertOutcome> {
    let store = SessionStore::new(&storage.temp_dir);
    let data = store.load(session_id).await?;

    if data.contacts.is_empty() {
        return Err(ServiceError::EmptySession);
    }

    let table = build_rows(&data.contacts, selected_fields);
    let (records_count, columns) = (table.len(), table.columns.len());
    let bytes = tokio::task::spawn_blocking(move || to_xlsx_bytes(&table)).await??;

    let export_filename = format!("{}.{EXPORT_EXTENSION}", file_stem(&data.filename));
    let export_path = path_in(&storage.download_dir, &export_filename);
    tokio::fs::write(&export_path, bytes).await?;

    store.remove(session_id).await?;

    tracing::info!(
        path = %export_path.display(),
        records = records_count,
        columns,
        "Export file created"
    );

    Ok(ConvertOutcome {
        export_filename,
        records_count,
    })
}
