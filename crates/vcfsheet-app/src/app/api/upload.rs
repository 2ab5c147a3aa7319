//! `POST /api/upload/{filename}`: raw VCF body in, parse summary out.

use http_body_util::{BodyExt, LengthLimitError, Limited};
use salvo::http::header::CONTENT_LENGTH;
use salvo::http::{ReqBody, StatusCode};
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use vcfsheet_core::constants::UPLOAD_PREVIEW_CONTACTS;
use vcfsheet_rfc::error::RfcError;
use vcfsheet_rfc::rfc::vcard::{ContactRecord, FieldGroups};
use vcfsheet_service::error::ServiceError;
use vcfsheet_service::upload::{UploadOutcome, ingest_upload};

use super::UPLOAD_ROUTE_COMPONENT;
use super::response::render_error;
use crate::config::get_config_from_depot;

pub(super) const INVALID_FORMAT: &str = "Invalid file format. Please upload a .vcf file.";
pub(super) const NO_CONTACTS: &str = "No valid contacts found in the VCF file";

/// ## Summary
/// Upload response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub session_id: String,
    pub filename: String,
    pub contacts_count: usize,
    pub available_fields: Vec<String>,
    pub field_suggestions: FieldGroups,
    pub preview_contacts: Vec<ContactRecord>,
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        let UploadOutcome { session_id, data } = outcome;
        Self {
            success: true,
            session_id: session_id.to_string(),
            contacts_count: data.contacts.len(),
            preview_contacts: data.preview(UPLOAD_PREVIEW_CONTACTS).to_vec(),
            filename: data.filename,
            available_fields: data.all_fields,
            field_suggestions: data.field_suggestions,
        }
    }
}

fn declared_length(req: &Request) -> Option<u64> {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why an upload body could not be read.
#[derive(Debug)]
enum BodyError {
    TooLarge,
    Read(BoxError),
}

impl From<BoxError> for BodyError {
    fn from(err: BoxError) -> Self {
        if err.downcast_ref::<LengthLimitError>().is_some() {
            Self::TooLarge
        } else {
            Self::Read(err)
        }
    }
}

/// Collects the body, failing once it grows past `limit` bytes.
async fn read_body(body: ReqBody, limit: usize) -> Result<Vec<u8>, BodyError> {
    let collected = Limited::new(body, limit).collect().await?;
    Ok(collected.to_bytes().to_vec())
}

/// ## Summary
/// Accepts a VCF file as the raw request body and opens a conversion session.
///
/// ## Side Effects
/// - Writes the upload to the upload directory, then removes it
/// - Writes a session file to the temp directory
///
/// ## Errors
/// Returns 400 for a wrong extension, an unreadable body or a file without
/// contacts, 413 for an oversized body, 500 if the file cannot be decoded or
/// stored.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn upload(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get configuration");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let filename = req.param::<String>("filename").unwrap_or_default();
    if filename.is_empty() || !settings.upload.accepts(&filename) {
        tracing::debug!(filename = %filename, "Rejected upload with wrong extension");
        render_error(res, StatusCode::BAD_REQUEST, INVALID_FORMAT);
        return;
    }

    let max_bytes = settings.upload.max_bytes;
    if declared_length(req).is_some_and(|len| len > max_bytes) {
        tracing::warn!(max_bytes, "Upload rejected: declared length over limit");
        render_error(res, StatusCode::PAYLOAD_TOO_LARGE, "File too large");
        return;
    }

    let body = match read_body(req.take_body(), settings.upload.max_bytes_usize()).await {
        Ok(bytes) => bytes,
        Err(BodyError::TooLarge) => {
            tracing::warn!(max_bytes, "Upload rejected: body over limit");
            render_error(res, StatusCode::PAYLOAD_TOO_LARGE, "File too large");
            return;
        }
        Err(BodyError::Read(e)) => {
            tracing::warn!(error = %e, "Failed to read upload body");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    match ingest_upload(&settings.storage, &filename, body).await {
        Ok(outcome) => {
            tracing::info!(session_id = %outcome.session_id, "Upload processed");
            res.render(Json(UploadResponse::from(outcome)));
        }
        Err(ServiceError::InvalidFilename(name)) => {
            tracing::debug!(filename = %name, "Upload filename sanitized to nothing");
            render_error(res, StatusCode::BAD_REQUEST, INVALID_FORMAT);
        }
        Err(ServiceError::RfcError(RfcError::NoVCardsFound | RfcError::NoContacts { .. })) => {
            render_error(res, StatusCode::BAD_REQUEST, NO_CONTACTS);
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in upload");
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing file: {e}"),
            );
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(UPLOAD_ROUTE_COMPONENT).push(Router::with_path("{filename}").post(upload))
}
