mod common;

use axum::http::StatusCode;
use common::{FailingSink, RecordingSink, valid_contact};
use std::sync::Arc;

#[tokio::test]
async fn test_api_contact_success_reaches_sink() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let response = server.post("/api/contact").form(&valid_contact()).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(
        json["message"],
        "Thanks! Haydn will reach out within one business day."
    );
    assert!(json.get("errors").is_none());

    let inquiries = sink.inquiries();
    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0].email, "jane@example.com");
    assert_eq!(inquiries[0].website, None);
    assert_eq!(inquiries[0].budget.as_deref(), Some("3k-8k"));
}

#[tokio::test]
async fn test_api_contact_validation_errors() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let response = server
        .post("/api/contact")
        .form(&[
            ("name", "J"),
            ("email", "jane-at-example"),
            ("project_type", "smb-website"),
            ("website", "example.com"),
            ("goals", "Help"),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Please fix the highlighted fields.");
    assert_eq!(json["errors"]["name"], "Please enter your name.");
    assert_eq!(json["errors"]["email"], "Enter a valid email address.");
    assert_eq!(
        json["errors"]["website"],
        "Enter a valid URL (include https://)."
    );
    assert_eq!(json["errors"]["goals"], "Share a bit more about your goals.");
    assert!(json["errors"].get("project_type").is_none());

    assert!(sink.inquiries().is_empty());
}

#[tokio::test]
async fn test_api_contact_missing_fields_are_validation_errors() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink));

    let response = server.post("/api/contact").form(&[("name", "Jane")]).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["errors"]["project_type"], "Select a project type.");
}

#[tokio::test]
async fn test_api_contact_non_form_body_gets_form_state() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let response = server.post("/api/contact").text("hello there").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Something went wrong. Please try again.");
    assert!(sink.inquiries().is_empty());
}

#[tokio::test]
async fn test_api_contact_whitespace_honeypot_is_dropped() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let mut form = valid_contact();
    form.retain(|(key, _)| *key != "company");
    form.push(("company", " "));
    let response = server.post("/api/contact").form(&form).await;

    response.assert_status_ok();
    assert!(sink.inquiries().is_empty());
}

#[tokio::test]
async fn test_api_contact_honeypot_is_silent() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let mut form = valid_contact();
    form.retain(|(key, _)| *key != "company");
    form.push(("company", "Spam Corp"));

    let response = server.post("/api/contact").form(&form).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "success");
    assert!(sink.inquiries().is_empty());
}

#[tokio::test]
async fn test_api_contact_sink_failure() {
    let server = common::create_test_server(common::create_test_state(Arc::new(FailingSink)));

    let response = server.post("/api/contact").form(&valid_contact()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["message"],
        "We couldn't send your message. Please try again or call/text 570-994-6186."
    );
}

#[tokio::test]
async fn test_contact_page_preselects_project_type() {
    let server = common::create_test_server(common::create_test_state(Arc::new(
        RecordingSink::default(),
    )));

    let response = server.get("/contact").add_query_param("type", "hoa").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<option value="hoa-website" selected>"#));
    assert!(!html.contains(r#"<option value="smb-website" selected>"#));
}

#[tokio::test]
async fn test_html_contact_post_keeps_values_on_error() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let response = server
        .post("/contact")
        .form(&[
            ("name", "Jane Doe"),
            ("email", "nope"),
            ("project_type", "marketing-seo"),
            ("budget", "500-3k"),
            ("goals", "Grow organic leads this year."),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Please fix the highlighted fields."));
    assert!(html.contains("Enter a valid email address."));
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains(r#"<option value="marketing-seo" selected>"#));
    assert!(html.contains(r#"<option value="500-3k" selected>"#));
    assert!(sink.inquiries().is_empty());
}

#[tokio::test]
async fn test_html_contact_post_success() {
    let sink = Arc::new(RecordingSink::default());
    let server = common::create_test_server(common::create_test_state(sink.clone()));

    let response = server.post("/contact").form(&valid_contact()).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Thanks! Haydn will reach out within one business day."));
    assert!(!html.contains(r#"value="Jane Doe""#));
    assert_eq!(sink.inquiries().len(), 1);
}
