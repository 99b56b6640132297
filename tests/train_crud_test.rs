// Train CRUD operations, including delete semantics

use axum::http::{Method, StatusCode};
use serde_json::json;
use transit_api::entities::Train;

mod common;
use common::{send, setup_test_app, train_json};

#[tokio::test]
async fn test_train_create_get_round_trip() {
    let app = setup_test_app().await;

    let body = train_json("ARG-7", "Argo Bromo Anggrek");
    let response = send(&app, Method::POST, "/trains", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    let created: Train = serde_json::from_value(response.data().clone()).unwrap();
    assert!(created.train_id > 0);
    assert_eq!(created.code_train, "ARG-7");
    assert_eq!(created.status, "available");

    let uri = format!("/trains/{}", created.train_id);
    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], 200);
    let fetched: Train = serde_json::from_value(response.data().clone()).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_train_update_changes_fields() {
    let app = setup_test_app().await;

    let body = train_json("ARG-7", "Argo Bromo Anggrek");
    let response = send(&app, Method::POST, "/trains", Some(body)).await;
    let train_id = response.data()["train_id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/trains/{train_id}"),
        Some(json!({
            "code_train": "TAK-1",
            "name": "Taksaka",
            "route": "Gambir - Yogyakarta",
            "status": "maintenance",
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(response.body["message"], "Successfully updated train");

    let updated: Train = serde_json::from_value(response.data().clone()).unwrap();
    assert_eq!(updated.train_id, i32::try_from(train_id).unwrap());
    assert_eq!(updated.code_train, "TAK-1");
    assert_eq!(updated.name, "Taksaka");
    assert_eq!(updated.route, "Gambir - Yogyakarta");
    assert_eq!(updated.status, "maintenance");

    // The change is persisted, not only echoed
    let response = send(&app, Method::GET, &format!("/trains/{train_id}"), None).await;
    let fetched: Train = serde_json::from_value(response.data().clone()).unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_requires_every_field() {
    let app = setup_test_app().await;

    let body = train_json("ARG-7", "Argo Bromo Anggrek");
    let response = send(&app, Method::POST, "/trains", Some(body)).await;
    let train_id = response.data()["train_id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/trains/{train_id}"),
        Some(json!({"name": "Only a name"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Failed binding train");
}

#[tokio::test]
async fn test_train_delete_removes_record() {
    let app = setup_test_app().await;

    let body = train_json("ARG-7", "Argo Bromo Anggrek");
    let response = send(&app, Method::POST, "/trains", Some(body)).await;
    let uri = format!("/trains/{}", response.data()["train_id"]);

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"code": 200, "message": "Successfully deleted train", "data": null})
    );

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Deleting twice reports the missing record
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Failed to delete train");
    assert!(response.body["errors"].as_str().unwrap().contains("train not found"));

    let response = send(&app, Method::GET, "/trains", None).await;
    assert_eq!(response.body["meta"]["count"], 0);
    assert_eq!(response.data(), &json!([]));
}
