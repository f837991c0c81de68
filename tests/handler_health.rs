mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use click_counter::api::handlers::{click_handler, health_handler};
use serde_json::json;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("session_store").is_some());
}

#[tokio::test]
async fn test_health_reports_store_occupancy() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/click", post(click_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    server.post("/api/click").json(&json!({})).await;
    server.post("/api/click").json(&json!({})).await;

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["checks"]["session_store"]["message"],
        "Sessions held: 2"
    );
}
