#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service over isolated storage directories
//! - Making HTTP requests
//! - Asserting on responses and on-disk state
//!
//! ## Isolation
//! Each `TestEnv` owns a temporary directory holding its upload, download and
//! temp folders; it is removed when the env is dropped, so tests can run in
//! parallel.

use std::path::{Path, PathBuf};

use calamine::{Reader, Xlsx};
use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde::de::DeserializeOwned;
use tempfile::TempDir;

use vcfsheet_test::component::config::{
    ConfigHandler, LoggingConfig, ServerConfig, Settings, StorageConfig, UploadConfig,
};
use vcfsheet_test::component::constants::{DEFAULT_MAX_UPLOAD_BYTES, EXPORT_SHEET_NAME};

pub use tracing;

/// Two contacts covering the common properties.
pub const SAMPLE_VCF: &str = "\
BEGIN:VCARD\r
VERSION:3.0\r
N:Doe;John;;;\r
FN:John Doe\r
TEL;CELL:555-1234\r
EMAIL;WORK:john@example.com\r
ADR;HOME:;;1 Main St;Springfield;IL;62701;USA\r
END:VCARD\r
BEGIN:VCARD\r
VERSION:3.0\r
FN:Jane Roe\r
TEL:555-5678\r
ORG:Acme;Sales\r
BDAY:19850615\r
END:VCARD\r
";

/// Builds a document with `count` minimal contacts named `Contact 1..=count`.
#[must_use]
pub fn many_contacts(count: usize) -> String {
    (1..=count)
        .map(|i| format!("BEGIN:VCARD\r\nFN:Contact {i}\r\nEND:VCARD\r\n"))
        .collect()
}

/// Reads every row of the `Contacts` sheet of an exported workbook as text.
///
/// ## Panics
/// Panics if `bytes` is not a workbook with that sheet.
#[must_use]
pub fn read_workbook(bytes: Vec<u8>) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(std::io::Cursor::new(bytes)).expect("Export should be an xlsx workbook");
    workbook
        .worksheet_range(EXPORT_SHEET_NAME)
        .expect("Workbook should have a Contacts sheet")
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

/// Builds an expected sheet row.
#[must_use]
pub fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Test configuration - static struct instead of loading from file.
fn test_config(root: &Path, max_bytes: u64) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        storage: StorageConfig {
            upload_dir: root.join("uploads"),
            download_dir: root.join("downloads"),
            temp_dir: root.join("temp"),
        },
        upload: UploadConfig {
            max_bytes,
            allowed_extension: "vcf".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// An isolated service plus the storage it writes to.
pub struct TestEnv {
    _root: TempDir,
    pub settings: Settings,
    pub service: Service,
}

impl TestEnv {
    /// Creates a test service with the default upload cap.
    ///
    /// ## Panics
    /// Panics if the storage directories cannot be created.
    pub async fn new() -> Self {
        Self::with_max_bytes(DEFAULT_MAX_UPLOAD_BYTES).await
    }

    /// Creates a test service with a custom upload cap.
    ///
    /// ## Panics
    /// Panics if the storage directories cannot be created.
    pub async fn with_max_bytes(max_bytes: u64) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = test_config(root.path(), max_bytes);

        vcfsheet_test::component::storage::ensure_dirs(&settings.storage)
            .await
            .expect("Failed to create storage dirs");

        // Create router with all handlers (matching main.rs setup)
        let router = Router::new()
            .hoop(ConfigHandler {
                settings: settings.clone(),
            })
            .push(vcfsheet_test::app::api::routes());

        Self {
            _root: root,
            settings,
            service: Service::new(router),
        }
    }

    #[must_use]
    pub fn download_path(&self, filename: &str) -> PathBuf {
        self.settings.storage.download_dir.join(filename)
    }

    /// Reads back an export written to the download directory.
    ///
    /// ## Panics
    /// Panics if the file is missing or not a workbook.
    #[must_use]
    pub fn read_export(&self, filename: &str) -> Vec<Vec<String>> {
        read_workbook(std::fs::read(self.download_path(filename)).expect("Export should exist"))
    }

    /// Number of entries in a storage directory.
    ///
    /// ## Panics
    /// Panics if the directory cannot be read.
    #[must_use]
    pub fn count_files(dir: &Path) -> usize {
        std::fs::read_dir(dir).expect("Failed to read dir").count()
    }

    /// Uploads `body` as `filename`.
    pub async fn upload(&self, filename: &str, body: impl Into<Vec<u8>>) -> TestResponse {
        TestRequest::new(Method::POST, &format!("/api/upload/{filename}"))
            .body(body)
            .send(&self.service)
            .await
    }

    /// Uploads `body` and returns the new session id.
    ///
    /// ## Panics
    /// Panics if the upload does not succeed.
    pub async fn upload_session(&self, filename: &str, body: impl Into<Vec<u8>>) -> String {
        let json: serde_json::Value = self
            .upload(filename, body)
            .await
            .assert_status(StatusCode::OK)
            .json();
        json["session_id"]
            .as_str()
            .expect("session_id should be a string")
            .to_string()
    }

    pub async fn preview(&self, session_id: &str) -> TestResponse {
        TestRequest::new(Method::GET, &format!("/api/preview/{session_id}"))
            .send(&self.service)
            .await
    }

    pub async fn convert(&self, body: &serde_json::Value) -> TestResponse {
        TestRequest::new(Method::POST, "/api/convert")
            .json_body(body)
            .send(&self.service)
            .await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        TestRequest::new(Method::GET, path).send(&self.service).await
    }
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON request body.
    ///
    /// ## Panics
    /// Panics if the value cannot be serialized.
    #[must_use]
    pub fn json_body(self, value: &serde_json::Value) -> Self {
        self.header("Content-Type", "application/json")
            .body(serde_json::to_vec(value).expect("JSON body should serialize"))
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {} (body: {})",
            self.status,
            self.text()
        );
        self
    }

    /// Asserts that a header contains the expected substring.
    #[must_use]
    pub fn assert_header_contains(self, name: &str, expected: &str) -> Self {
        let value = self.header(name);
        assert!(value.is_some(), "Header '{name}' not found in response");
        let value = value.unwrap_or_default();
        assert!(
            value.contains(expected),
            "Header '{name}' expected to contain '{expected}' but got '{value}'"
        );
        self
    }

    /// Asserts that the JSON body has `{"error": expected}`.
    #[must_use]
    pub fn assert_error(self, expected: &str) -> Self {
        let json: serde_json::Value = self.json();
        assert_eq!(json["error"], expected, "Unexpected error body");
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON for `T`.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Response body should be valid JSON")
    }
}
