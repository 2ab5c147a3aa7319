//! `POST /api/upload/{filename}`

use salvo::http::StatusCode;

use super::helpers::{SAMPLE_VCF, TestEnv, many_contacts};

#[test_log::test(tokio::test)]
async fn upload_returns_summary() {
    let env = TestEnv::new().await;

    let json: serde_json::Value = env
        .upload("contacts.vcf", SAMPLE_VCF)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(json["success"], true);
    assert_eq!(json["filename"], "contacts.vcf");
    assert_eq!(json["contacts_count"], 2);
    assert!(uuid::Uuid::parse_str(json["session_id"].as_str().unwrap()).is_ok());

    let fields: Vec<&str> = json["available_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    let mut sorted = fields.clone();
    sorted.sort_unstable();
    assert_eq!(fields, sorted);
    assert!(fields.contains(&"Phone (Mobile)"));
    assert!(fields.contains(&"City (Home)"));
    assert!(fields.contains(&"Birthday"));

    let preview = json["preview_contacts"].as_array().unwrap();
    assert_eq!(preview.len(), 2);
    assert_eq!(preview[0]["Full Name"], "John Doe");
    assert_eq!(preview[1]["Birthday"], "1985-06-15");
}

#[test_log::test(tokio::test)]
async fn upload_groups_fields() {
    let env = TestEnv::new().await;

    let json: serde_json::Value = env
        .upload("contacts.vcf", SAMPLE_VCF)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let groups = json["field_suggestions"].as_object().unwrap();
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "Name Fields",
            "Contact Fields",
            "Address Fields",
            "Work Fields",
            "Personal Fields",
            "Other Fields",
        ]
    );
    assert_eq!(groups["Other Fields"], serde_json::json!(["Version"]));
}

#[test_log::test(tokio::test)]
async fn upload_preview_is_capped_at_three() {
    let env = TestEnv::new().await;

    let json: serde_json::Value = env
        .upload("many.vcf", many_contacts(5))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(json["contacts_count"], 5);
    assert_eq!(json["preview_contacts"].as_array().unwrap().len(), 3);
}

#[test_log::test(tokio::test)]
async fn upload_rejects_wrong_extension() {
    let env = TestEnv::new().await;

    let _ = env
        .upload("contacts.csv", SAMPLE_VCF)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid file format. Please upload a .vcf file.");

    let _ = env
        .upload("contacts", SAMPLE_VCF)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid file format. Please upload a .vcf file.");
}

#[test_log::test(tokio::test)]
async fn upload_accepts_uppercase_extension() {
    let env = TestEnv::new().await;

    let _ = env
        .upload("CONTACTS.VCF", SAMPLE_VCF)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn upload_without_contacts_is_rejected() {
    let env = TestEnv::new().await;

    let _ = env
        .upload("empty.vcf", "no vcards in here")
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("No valid contacts found in the VCF file");

    let _ = env
        .upload("blank.vcf", "BEGIN:VCARD\r\nVERSION:\r\nEND:VCARD\r\n")
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("No valid contacts found in the VCF file");

    assert_eq!(TestEnv::count_files(&env.settings.storage.temp_dir), 0);
    assert_eq!(TestEnv::count_files(&env.settings.storage.upload_dir), 0);
}

#[test_log::test(tokio::test)]
async fn upload_over_limit_is_rejected() {
    let env = TestEnv::with_max_bytes(64).await;

    let _ = env
        .upload("big.vcf", many_contacts(10))
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    assert_eq!(TestEnv::count_files(&env.settings.storage.temp_dir), 0);
}

#[test_log::test(tokio::test)]
async fn upload_decodes_latin1() {
    let env = TestEnv::new().await;

    let json: serde_json::Value = env
        .upload("latin.vcf", b"BEGIN:VCARD\r\nFN:Ren\xe9e\r\nEND:VCARD\r\n".to_vec())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(json["preview_contacts"][0]["Full Name"], "Renée");
}

#[test_log::test(tokio::test)]
async fn upload_skips_broken_card_but_keeps_others() {
    let env = TestEnv::new().await;
    let body = format!("{SAMPLE_VCF}BEGIN:VCARD\r\ngarbage line\r\nEND:VCARD\r\n");

    let json: serde_json::Value = env
        .upload("mixed.vcf", body)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(json["contacts_count"], 2);
}
