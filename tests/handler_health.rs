mod common;

use axum::{Router, routing::get};
use axum::http::StatusCode;
use axum_test::TestServer;
use common::RecordingSink;
use multimedium_site::api::handlers::health_handler;
use multimedium_site::config::SiteVariant;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(Arc::new(RecordingSink::default()));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["content"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_missing_content_dir() {
    let missing = common::fixtures_dir().join("does-not-exist");
    let state = common::create_test_state_with(
        missing,
        Arc::new(RecordingSink::default()),
        SiteVariant::Primary,
    );
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["content"]["status"], "error");
    assert!(json["checks"]["content"]["message"].is_string());
}
