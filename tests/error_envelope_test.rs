// Every failure is a 400 with {code, message, errors}

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{send, send_raw, setup_test_app, train_json};

fn assert_error_shape(body: &serde_json::Value, message: &str) {
    assert_eq!(body["code"], 400, "{body}");
    assert_eq!(body["message"], message, "{body}");
    assert!(body["errors"].is_string(), "{body}");
    assert!(body.get("data").is_none(), "{body}");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = setup_test_app().await;

    let response = send_raw(
        &app,
        Method::POST,
        "/trains",
        Some("application/json"),
        "{\"code_train\": ".to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Failed binding train");
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = setup_test_app().await;

    let response = send_raw(
        &app,
        Method::POST,
        "/stations",
        None,
        json!({"code": "GMR", "name": "Gambir", "initial": "GMR"}).to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Failed binding station");
}

#[tokio::test]
async fn test_wrong_field_type() {
    let app = setup_test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/train-carriages",
        Some(json!({
            "train_id": "one",
            "name": "Executive 1",
            "class": "executive",
            "price": 1,
            "seat_count": 1,
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Failed binding train carriage");
}

#[tokio::test]
async fn test_non_integer_id() {
    let app = setup_test_app().await;

    for method in [Method::GET, Method::DELETE] {
        let response = send(&app, method, "/trains/abc", None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_error_shape(&response.body, "Invalid train id");
        assert!(response.body["errors"].as_str().unwrap().contains("abc"));
    }

    let body = train_json("ARG-7", "Argo");
    let response = send(&app, Method::PUT, "/trains/abc", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Invalid train id");
}

#[tokio::test]
async fn test_empty_batch() {
    let app = setup_test_app().await;

    let response = send(&app, Method::POST, "/stations", Some(json!([]))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Failed to create a station");
    assert_eq!(response.body["errors"], "at least one record is required");
}

#[tokio::test]
async fn test_missing_record() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/stations/12345", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Failed to get station by id");

    let response = send(&app, Method::DELETE, "/stations/12345", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_shape(&response.body, "Failed to delete station");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["openapi"].as_str().unwrap().starts_with("3."));
    for path in ["/stations", "/trains/{id}", "/train-carriages"] {
        assert!(response.body["paths"].get(path).is_some(), "{path}");
    }
    assert!(response.body["components"]["schemas"].get("TrainCarriage").is_some());
}
