//! Upload → preview → convert → download, end to end.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{TestEnv, read_workbook, row};

#[test_log::test(tokio::test)]
async fn full_round_trip() {
    let env = TestEnv::new().await;

    let vcf = "\
BEGIN:VCARD\r
VERSION:3.0\r
FN:Ann Example\r
NOTE:Met at the\r
  conference\r
X-ANNIVERSARY:2010-05-01\r
END:VCARD\r
";

    let session_id = env.upload_session("address%20book.vcf", vcf).await;

    let preview: serde_json::Value = env
        .preview(&session_id)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(preview["contacts"][0]["Notes"], "Met at the conference");
    assert_eq!(preview["contacts"][0]["Anniversary"], "2010-05-01");

    let converted: serde_json::Value = env
        .convert(&json!({
            "session_id": session_id,
            "selected_fields": ["Full Name", "Anniversary", "Phone"],
        }))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(converted["export_filename"], "address_book.xlsx");

    let url = converted["download_url"].as_str().unwrap();
    let resp = env.get(url).await.assert_status(StatusCode::OK);
    assert_eq!(
        read_workbook(resp.body),
        vec![
            row(&["Full Name", "Anniversary", "Phone"]),
            row(&["Ann Example", "2010-05-01", ""]),
        ]
    );

    assert_eq!(TestEnv::count_files(&env.settings.storage.temp_dir), 0);
    assert_eq!(TestEnv::count_files(&env.settings.storage.upload_dir), 0);
}
