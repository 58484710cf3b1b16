use axum::http::StatusCode;
use cb_api::answer::CheckAnswerResponse;
use serde_json::{Value, json};

use crate::common::{TestClient, test_app};

const CHECK: &str = "/v1/answers/check";

async fn check(client: &TestClient, body: Value) -> CheckAnswerResponse {
    let response = client.post_json(CHECK, &body).await;
    assert_eq!(response.status, StatusCode::OK, "body: {}", response.text());
    response.json()
}

#[tokio::test]
async fn test_correct_answer_earns_points() {
    let client = TestClient::new(test_app());

    let result = check(
        &client,
        json!({
            "user_answer": "the eiffel tower",
            "correct_answer": "Eiffel Tower",
            "base_points": 600
        }),
    )
    .await;

    assert_eq!(
        result,
        CheckAnswerResponse {
            correct: true,
            points: 600,
            reason: Some("compressed".to_string()),
        }
    );
}

#[tokio::test]
async fn test_lenient_matches_report_their_stage() {
    let client = TestClient::new(test_app());

    let cases = [
        ("fone", "phone", "phonetic_respelling"),
        ("WWI", "World War 1", "equivalent_terms"),
        ("Honest Abe", "Abraham Lincoln (or Honest Abe)", "parenthetical"),
        ("Lincoln and Washington", "Washington & Lincoln", "list_items"),
        ("recieve", "receive", "phonetic_whole"),
    ];

    for (user, correct, reason) in cases {
        let result = check(
            &client,
            json!({ "user_answer": user, "correct_answer": correct, "base_points": 200 }),
        )
        .await;

        assert!(result.correct, "{user:?} should match {correct:?}");
        assert_eq!(result.points, 200);
        assert_eq!(result.reason.as_deref(), Some(reason));
    }
}

#[tokio::test]
async fn test_wrong_answer_earns_nothing() {
    let client = TestClient::new(test_app());

    for (user, correct) in [("xyz", "Paris"), ("god", "dog")] {
        let result = check(
            &client,
            json!({ "user_answer": user, "correct_answer": correct, "base_points": 600 }),
        )
        .await;

        assert_eq!(
            result,
            CheckAnswerResponse {
                correct: false,
                points: 0,
                reason: None,
            }
        );
    }
}

#[tokio::test]
async fn test_null_and_missing_answers_are_empty() {
    let client = TestClient::new(test_app());

    let result = check(
        &client,
        json!({ "user_answer": null, "correct_answer": "Paris", "base_points": 100 }),
    )
    .await;
    assert!(!result.correct);
    assert_eq!(result.points, 0);

    let result = check(&client, json!({})).await;
    assert!(result.correct);
    assert_eq!(result.points, 0);
}

#[tokio::test]
async fn test_answer_too_long() {
    let client = TestClient::new(test_app());

    let response = client
        .post_json(
            CHECK,
            &json!({ "user_answer": "a".repeat(501), "correct_answer": "Paris" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|msg| msg.contains("user_answer")),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn test_base_points_out_of_range() {
    let client = TestClient::new(test_app());

    for base_points in [-1, 100_001] {
        let response = client
            .post_json(
                CHECK,
                &json!({
                    "user_answer": "Paris",
                    "correct_answer": "Paris",
                    "base_points": base_points
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_malformed_json() {
    let client = TestClient::new(test_app());

    let response = client.post_raw(CHECK, "{\"user_answer\": ").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.headers["content-type"], "application/json");
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_wrong_field_type() {
    let client = TestClient::new(test_app());

    let response = client
        .post_json(CHECK, &json!({ "user_answer": 42, "correct_answer": "42" }))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
