/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const UPLOAD_ROUTE_COMPONENT: &str = "upload";
pub const PREVIEW_ROUTE_COMPONENT: &str = "preview";
pub const CONVERT_ROUTE_COMPONENT: &str = "convert";

pub const DOWNLOAD_ROUTE_COMPONENT: &str = "download";
pub const DOWNLOAD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", DOWNLOAD_ROUTE_COMPONENT);

/// Upload size cap applied when the configuration does not override it (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// File extension accepted by the upload gate.
pub const VCF_EXTENSION: &str = "vcf";

/// File extension of exported spreadsheets.
pub const EXPORT_EXTENSION: &str = "xlsx";

/// Name of the single worksheet in an export.
pub const EXPORT_SHEET_NAME: &str = "Contacts";

pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";

/// Contacts echoed back in the upload response.
pub const UPLOAD_PREVIEW_CONTACTS: usize = 3;

/// Contacts returned by the preview endpoint.
pub const PREVIEW_CONTACTS: usize = 10;
