//! `GET /api/download/{filename}`

use salvo::http::StatusCode;

use super::helpers::TestEnv;

#[test_log::test(tokio::test)]
async fn download_serves_attachment() {
    let env = TestEnv::new().await;
    std::fs::write(env.download_path("book.xlsx"), "Full Name\nAnn\n").unwrap();

    let resp = env
        .get("/api/download/book.xlsx")
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("content-disposition", "attachment")
        .assert_header_contains("content-disposition", "book.xlsx");

    assert_eq!(resp.text(), "Full Name\nAnn\n");
}

#[test_log::test(tokio::test)]
async fn download_missing_file() {
    let env = TestEnv::new().await;

    let _ = env
        .get("/api/download/nothing.xlsx")
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("File not found");
}

#[test_log::test(tokio::test)]
async fn download_cannot_escape_directory() {
    let env = TestEnv::new().await;
    let outside = env.settings.storage.temp_dir.join("secret.xlsx");
    std::fs::write(&outside, "secret").unwrap();

    let _ = env
        .get("/api/download/..%2Ftemp%2Fsecret.xlsx")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn healthcheck() {
    let env = TestEnv::new().await;

    let resp = env.get("/api/healthcheck").await.assert_status(StatusCode::OK);
    assert_eq!(resp.text(), "OK");
}
