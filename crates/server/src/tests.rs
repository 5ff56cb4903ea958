// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use atrium_api::EventPolicy;
use atrium_persistence::{DirectorySeed, Persistence, SharedPersistence};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::routes::{AppState, build_router};

const TEST_SEED: &str = r#"{
    "departments": [{ "code": "ENG", "name": "Engineering", "units": ["Backend"] }],
    "users": [{ "email": "alice@co.com", "name": "Alice" }]
}"#;

/// Helper to create a router over a seeded in-memory database.
fn create_test_app() -> Router {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    persistence
        .apply_seed(&DirectorySeed::from_json_str(TEST_SEED).unwrap())
        .unwrap();
    build_router(AppState {
        store: SharedPersistence::new(persistence),
        policy: EventPolicy::default(),
    })
}

fn post_event(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/events")
        .header("content-type", "application/json")
        .header("x-actor-id", "alice@co.com")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn planning_request(user: &str) -> Value {
    json!({
        "title": "Planning",
        "startDateTime": "2024-03-01T09:00:00Z",
        "endTime": "10:30",
        "isAllDay": false,
        "userIds": [user],
        "departmentIds": ["ENG"]
    })
}

#[tokio::test]
async fn test_create_event_succeeds() {
    let app: Router = create_test_app();

    let response = app
        .oneshot(post_event(&planning_request("alice@co.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Event created successfully");
    assert_eq!(body["data"]["endDateTime"], "2024-03-01T10:30:00Z");
    assert_eq!(body["data"]["endTime"], "10:30");
    assert_eq!(body["data"]["createdBy"], "alice@co.com");
    assert_eq!(body["data"]["users"][0]["email"], "alice@co.com");
    assert_eq!(body["data"]["departments"][0]["code"], "ENG");
}

#[tokio::test]
async fn test_create_event_with_unknown_user_is_rejected() {
    let app: Router = create_test_app();

    let response = app
        .clone()
        .oneshot(post_event(&planning_request("ghost@co.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Unable to resolve related records");
    assert_eq!(body["details"]["missingUsers"], json!(["ghost@co.com"]));
    assert_eq!(body["details"]["missingDepartments"], json!([]));
    assert_eq!(body["details"]["missingUnits"], json!([]));

    let listed: Value = json_body(app.oneshot(get("/events")).await.unwrap()).await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_validation_errors_are_reported_per_field() {
    let app: Router = create_test_app();

    let response = app
        .oneshot(post_event(&json!({ "title": "", "startDateTime": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "Validation error");
    assert!(body["details"]["title"].is_array());
    assert!(body["details"]["startDateTime"].is_array());
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app: Router = create_test_app();
    let request: Request<Body> = Request::builder()
        .method("POST")
        .uri("/events")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "Validation error");
    assert!(body["details"]["body"][0].is_string());
}

#[tokio::test]
async fn test_timing_violation_returns_message() {
    let app: Router = create_test_app();

    let response = app
        .oneshot(post_event(&json!({
            "title": "Late",
            "startDateTime": "2024-01-01T23:30:00Z",
            "endTime": "00:15"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert_eq!(body["error"], "Event must end on the same day it starts");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_get_and_list_events() {
    let app: Router = create_test_app();
    let created: Value = json_body(
        app.clone()
            .oneshot(post_event(&planning_request("alice@co.com")))
            .await
            .unwrap(),
    )
    .await;
    let event_id: i64 = created["data"]["id"].as_i64().unwrap();

    let fetched = app
        .clone()
        .oneshot(get(&format!("/events/{event_id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched).await["data"], created["data"]);

    let in_range: Value = json_body(
        app.clone()
            .oneshot(get(
                "/events?from=2024-03-01T10:00:00Z&to=2024-03-01T11:00:00Z",
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(in_range["data"].as_array().unwrap().len(), 1);

    let out_of_range: Value = json_body(
        app.oneshot(get("/events?from=2024-03-02T00:00:00Z"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(out_of_range["data"], json!([]));
}

#[tokio::test]
async fn test_missing_event_is_not_found() {
    let app: Router = create_test_app();

    let response = app.oneshot(get("/events/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response).await;
    assert_eq!(body, json!({ "ok": false, "error": "Event not found" }));
}

#[tokio::test]
async fn test_bad_list_bound_is_a_validation_error() {
    let app: Router = create_test_app();

    let response = app.oneshot(get("/events?from=soon")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await;
    assert!(body["details"]["from"].is_array());
}

#[tokio::test]
async fn test_health() {
    let app: Router = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "ok": true }));
}
