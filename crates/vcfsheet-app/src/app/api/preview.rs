//! `GET /api/preview/{session_id}`

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use vcfsheet_core::constants::PREVIEW_CONTACTS;
use vcfsheet_rfc::rfc::vcard::ContactRecord;
use vcfsheet_service::error::ServiceError;
use vcfsheet_service::session::SessionStore;

use super::PREVIEW_ROUTE_COMPONENT;
use super::response::render_error;
use crate::config::get_config_from_depot;

/// ## Summary
/// Preview response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub success: bool,
    pub contacts: Vec<ContactRecord>,
    pub total_count: usize,
}

/// ## Summary
/// Returns the first contacts of an open session.
///
/// ## Errors
/// Returns 400 if the session does not exist, 500 if it cannot be read.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn preview(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get configuration");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let session_id = req.param::<String>("session_id").unwrap_or_default();

    match SessionStore::new(&settings.storage.temp_dir).load(&session_id).await {
        Ok(data) => res.render(Json(PreviewResponse {
            success: true,
            contacts: data.preview(PREVIEW_CONTACTS).to_vec(),
            total_count: data.contacts.len(),
        })),
        Err(ServiceError::SessionNotFound(_)) => {
            render_error(res, StatusCode::BAD_REQUEST, "Session expired");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session for preview");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PREVIEW_ROUTE_COMPONENT).push(Router::with_path("{session_id}").get(preview))
}
