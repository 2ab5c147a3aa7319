//! `GET /api/download/{filename}`

use salvo::fs::NamedFile;
use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler};
use vcfsheet_service::error::ServiceError;
use vcfsheet_service::storage::resolve_download;

use super::DOWNLOAD_ROUTE_COMPONENT;
use super::response::render_error;
use crate::config::get_config_from_depot;

/// ## Summary
/// Serves a finished export as an attachment.
///
/// ## Errors
/// Returns 404 if no such export exists.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn download(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get configuration");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let filename = req.param::<String>("filename").unwrap_or_default();

    match resolve_download(&settings.storage, &filename).await {
        Ok(path) => {
            let attached = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or(filename);
            NamedFile::builder(path)
                .attached_name(attached)
                .send(req.headers(), res)
                .await;
        }
        Err(ServiceError::NotFound(_)) => {
            render_error(res, StatusCode::NOT_FOUND, "File not found");
        }
        Err(e) => {
            tracing::error!(error = %e, "Error downloading file");
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error downloading file: {e}"),
            );
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(DOWNLOAD_ROUTE_COMPONENT).push(Router::with_path("{filename}").get(download))
}
