//! `POST /api/convert`

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use vcfsheet_service::convert::convert_session;
use vcfsheet_service::error::ServiceError;

use super::response::render_error;
use super::{CONVERT_ROUTE_COMPONENT, DOWNLOAD_ROUTE_PREFIX};
use crate::config::get_config_from_depot;

/// ## Summary
/// Convert request payload
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    /// Columns to export, in order. Empty or absent exports every field.
    #[serde(default)]
    pub selected_fields: Vec<String>,
}

/// ## Summary
/// Convert response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub export_filename: String,
    pub download_url: String,
    pub records_count: usize,
}

/// ## Summary
/// Exports a session's contacts with the selected columns.
///
/// ## Side Effects
/// - Writes the export to the download directory
/// - Deletes the session
///
/// ## Errors
/// Returns 400 for a missing, unknown or empty session, 500 if the export
/// cannot be written.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn convert(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get configuration");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let request: ConvertRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to parse convert request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let Some(session_id) = request.session_id.filter(|id| !id.is_empty()) else {
        render_error(res, StatusCode::BAD_REQUEST, "Missing session data");
        return;
    };

    match convert_session(&settings.storage, &session_id, &request.selected_fields).await {
        Ok(outcome) => {
            let download_url = format!("{DOWNLOAD_ROUTE_PREFIX}/{}", outcome.export_filename);
            res.render(Json(ConvertResponse {
                success: true,
                export_filename: outcome.export_filename,
                download_url,
                records_count: outcome.records_count,
            }));
        }
        Err(ServiceError::SessionNotFound(_)) => render_error(
            res,
            StatusCode::BAD_REQUEST,
            "Session expired. Please upload the file again.",
        ),
        Err(ServiceError::EmptySession) => {
            render_error(res, StatusCode::BAD_REQUEST, "No contacts data found");
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in convert");
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error converting to spreadsheet: {e}"),
            );
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONVERT_ROUTE_COMPONENT).post(convert)
}
