//! Integration tests for the public endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_root_endpoint() {
    let app = common::TestApp::in_memory();

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Contacts Management API is running"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::in_memory();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::TestApp::in_memory();

    let (status, _) = app.get("/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_root_endpoint_with_database() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
}
