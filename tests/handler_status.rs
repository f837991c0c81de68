mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use click_counter::api::handlers::{click_handler, status_handler};
use serde_json::json;

fn status_app() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/click", post(click_handler))
        .route("/api/status/{session}", get(status_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_status_reports_count_without_incrementing() {
    let server = status_app();

    let first = server.post("/api/click").json(&json!({})).await;
    let session = first.json::<serde_json::Value>()["session"]
        .as_str()
        .unwrap()
        .to_string();

    server
        .post("/api/click")
        .json(&json!({ "session": session }))
        .await;

    let status = server.get(&format!("/api/status/{}", session)).await;
    status.assert_status_ok();

    let body = status.json::<serde_json::Value>();
    assert_eq!(body["clicks"], 2);
    assert_eq!(body["message"], "You clicked!");

    // A second status read sees the same count.
    let again = server.get(&format!("/api/status/{}", session)).await;
    assert_eq!(again.json::<serde_json::Value>()["clicks"], 2);
}

#[tokio::test]
async fn test_status_of_unknown_session_is_404() {
    let server = status_app();

    let response = server.get("/api/status/never-minted").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_status_reflects_unlocked_state() {
    let server = status_app();

    let first = server.post("/api/click").json(&json!({})).await;
    let session = first.json::<serde_json::Value>()["session"]
        .as_str()
        .unwrap()
        .to_string();

    for _ in 2..=5 {
        server
            .post("/api/click")
            .json(&json!({ "session": session }))
            .await;
    }

    let status = server.get(&format!("/api/status/{}", session)).await;

    let body = status.json::<serde_json::Value>();
    assert_eq!(body["clicks"], 5);
    assert_eq!(body["unlocked"], true);
    assert_eq!(body["message"], "You just unlocked developer mode!");
    assert_eq!(body["background"], "#121212");
}
