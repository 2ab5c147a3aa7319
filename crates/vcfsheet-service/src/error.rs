use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] vcfsheet_rfc::error::RfcError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export too large: {rows} rows by {columns} columns")]
    ExportTooLarge { rows: usize, columns: usize },

    #[error("Background task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session has no contacts")]
    EmptySession,

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
