mod convert;
mod download;
mod healthcheck;
mod preview;
mod response;
mod upload;

use salvo::Router;

// Re-export route constants from core
pub use vcfsheet_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, CONVERT_ROUTE_COMPONENT, DOWNLOAD_ROUTE_COMPONENT,
    DOWNLOAD_ROUTE_PREFIX, HEALTHCHECK_ROUTE_COMPONENT, PREVIEW_ROUTE_COMPONENT,
    UPLOAD_ROUTE_COMPONENT,
};
pub use response::ErrorResponse;

/// ## Summary
/// Constructs the API router: upload, preview, convert, download and healthcheck.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(upload::routes())
        .push(preview::routes())
        .push(convert::routes())
        .push(download::routes())
        .push(healthcheck::routes())
}
