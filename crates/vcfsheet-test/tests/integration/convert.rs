//! `POST /api/convert`

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{SAMPLE_VCF, TestEnv, row};

#[test_log::test(tokio::test)]
async fn convert_all_fields() {
    let env = TestEnv::new().await;
    let session_id = env.upload_session("team.vcf", SAMPLE_VCF).await;

    let json: serde_json::Value = env
        .convert(&json!({ "session_id": session_id }))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(json["success"], true);
    assert_eq!(json["export_filename"], "team.xlsx");
    assert_eq!(json["download_url"], "/api/download/team.xlsx");
    assert_eq!(json["records_count"], 2);

    let sheet = env.read_export("team.xlsx");
    assert_eq!(
        sheet[0],
        row(&[
            "Version",
            "Last Name",
            "First Name",
            "Full Name",
            "Phone (Mobile)",
            "Email (Work)",
            "Street Address (Home)",
            "City (Home)",
            "State/Province (Home)",
            "Postal Code (Home)",
            "Country (Home)",
            "Phone",
            "Organization",
            "Department",
            "Birthday",
        ])
    );
    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet[2][3], "Jane Roe");
    assert_eq!(sheet[2][14], "1985-06-15");
}

#[test_log::test(tokio::test)]
async fn convert_selected_fields_fills_missing_with_empty() {
    let env = TestEnv::new().await;
    let session_id = env.upload_session("team.vcf", SAMPLE_VCF).await;

    let _ = env
        .convert(&json!({
            "session_id": session_id,
            "selected_fields": ["Full Name", "Email (Work)"],
        }))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(
        env.read_export("team.xlsx"),
        vec![
            row(&["Full Name", "Email (Work)"]),
            row(&["John Doe", "john@example.com"]),
            row(&["Jane Roe", ""]),
        ]
    );
}

#[test_log::test(tokio::test)]
async fn convert_closes_session() {
    let env = TestEnv::new().await;
    let session_id = env.upload_session("team.vcf", SAMPLE_VCF).await;

    let _ = env
        .convert(&json!({ "session_id": session_id }))
        .await
        .assert_status(StatusCode::OK);

    let _ = env
        .convert(&json!({ "session_id": session_id }))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Session expired. Please upload the file again.");

    let _ = env
        .preview(&session_id)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn convert_requires_session_id() {
    let env = TestEnv::new().await;

    let _ = env
        .convert(&json!({ "selected_fields": [] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Missing session data");

    let _ = env
        .convert(&json!({ "session_id": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Missing session data");
}

#[test_log::test(tokio::test)]
async fn convert_unknown_session() {
    let env = TestEnv::new().await;

    let _ = env
        .convert(&json!({ "session_id": uuid::Uuid::new_v4().to_string() }))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Session expired. Please upload the file again.");
}
