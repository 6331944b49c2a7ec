//! HTTP API tests.
//!
//! Each test drives a fresh router backed by an in-memory store, so they need
//! no network or disk.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use workouts::{
    create_router, persistence::JsonPersistence, request_id::REQUEST_ID_HEADER,
    storage::KeyValueStore, store::WorkoutStore,
};

async fn test_app() -> Router {
    let persistence = JsonPersistence::new(KeyValueStore::new_in_memory());
    let store = WorkoutStore::open(persistence).await.unwrap();
    create_router(store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn morning_run() -> Value {
    json!({
        "kind": "running",
        "coords": [40.0, -3.7],
        "distance": 5.2,
        "duration": 24,
        "cadence": 178
    })
}

fn evening_ride() -> Value {
    json!({
        "kind": "cycling",
        "coords": [40.0, -3.7],
        "distance": 27,
        "duration": 95,
        "elevationGain": 523
    })
}

#[tokio::test]
async fn test_create_and_list() {
    let app = test_app().await;

    let (status, run) = send(&app, Method::POST, "/workouts", Some(morning_run())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(run["kind"], "running");
    assert!((run["pace"].as_f64().unwrap() - 4.615).abs() < 0.001);
    assert!(run.get("speed").is_none());
    assert!(run["description"].as_str().unwrap().starts_with("Running on "));

    let (status, ride) = send(&app, Method::POST, "/workouts", Some(evening_ride())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!((ride["speed"].as_f64().unwrap() - 17.05).abs() < 0.01);

    let (status, list) = send(&app, Method::GET, "/workouts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total_count"], 2);
    assert_eq!(list["items"][0]["id"], run["id"]);
    assert_eq!(list["items"][1]["id"], ride["id"]);
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/workouts",
        Some(json!({"kind": "running", "coords": [40.0, -3.7], "distance": -5, "duration": 24})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["distance", "cadence"]);

    let (_, list) = send(&app, Method::GET, "/workouts", None).await;
    assert_eq!(list["total_count"], 0);
}

#[tokio::test]
async fn test_create_rejects_coords_off_the_globe() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/workouts",
        Some(json!({"kind": "cycling", "coords": [95.0, -3.7], "distance": 27, "duration": 95, "elevationGain": 523})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "coords");
    assert_eq!(body["fields"][0]["problem"], "out_of_range");

    let (_, list) = send(&app, Method::GET, "/workouts", None).await;
    assert_eq!(list["total_count"], 0);
}

#[tokio::test]
async fn test_get_and_delete() {
    let app = test_app().await;
    let (_, run) = send(&app, Method::POST, "/workouts", Some(morning_run())).await;
    let uri = format!("/workouts/{}", run["id"].as_str().unwrap());

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, run);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_flow() {
    let app = test_app().await;
    let (_, run) = send(&app, Method::POST, "/workouts", Some(morning_run())).await;
    let id = run["id"].as_str().unwrap();

    let (status, pending) = send(&app, Method::GET, "/edit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending["editing"], false);

    let (status, snapshot) =
        send(&app, Method::POST, &format!("/workouts/{id}/edit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["distance"], 5.2);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/edit",
        Some(json!({"distance": 0, "duration": 30, "cadence": 180})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, pending) = send(&app, Method::GET, "/edit", None).await;
    assert_eq!(pending["workout"]["id"], id);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        "/edit",
        Some(json!({"distance": 10, "duration": 30, "cadence": 180})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["pace"], 3.0);
    assert_eq!(updated["description"], run["description"]);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/edit",
        Some(json!({"distance": 12, "duration": 30, "cadence": 180})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cancel_and_delete_during_edit() {
    let app = test_app().await;
    let (_, ride) = send(&app, Method::POST, "/workouts", Some(evening_ride())).await;
    let id = ride["id"].as_str().unwrap();

    send(&app, Method::POST, &format!("/workouts/{id}/edit"), None).await;
    let (status, _) = send(&app, Method::DELETE, "/edit", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, pending) = send(&app, Method::GET, "/edit", None).await;
    assert_eq!(pending["editing"], false);

    send(&app, Method::POST, &format!("/workouts/{id}/edit"), None).await;
    send(&app, Method::DELETE, &format!("/workouts/{id}"), None).await;
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/edit",
        Some(json!({"distance": 30, "duration": 60, "elevationGain": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_begin_edit_unknown() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::POST, "/workouts/nope/edit", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset() {
    let app = test_app().await;
    send(&app, Method::POST, "/workouts", Some(morning_run())).await;
    send(&app, Method::POST, "/workouts", Some(evening_ride())).await;

    let (status, _) = send(&app, Method::DELETE, "/workouts", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health["workouts"], 0);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(&REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[&REQUEST_ID_HEADER], "abc-123");
}

#[tokio::test]
async fn test_openapi_lists_routes() {
    let app = test_app().await;
    let (status, doc) = send(&app, Method::GET, "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/workouts").is_some());
    assert!(doc["paths"].get("/edit").is_some());
}
