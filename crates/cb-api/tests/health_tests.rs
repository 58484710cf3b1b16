use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{TestClient, test_app};

#[tokio::test]
async fn test_health() {
    let client = TestClient::new(test_app());

    let response = client.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn test_unknown_route() {
    let client = TestClient::new(test_app());

    let response = client.get("/v1/clues").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "The requested resource was not found");
}

#[tokio::test]
async fn test_wrong_method_on_check() {
    let client = TestClient::new(test_app());

    let response = client.get("/v1/answers/check").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
