use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};
use tower::ServiceExt;
use transit_api::routes::create_router;
use transit_api::{AppConfig, Migrator};

// Helper function to get database URL from environment or default to SQLite
fn get_test_database_url() -> String {
    std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
}

#[allow(dead_code)]
pub fn is_sqlite() -> bool {
    get_test_database_url().starts_with("sqlite")
}

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url = get_test_database_url();
    let db = Database::connect(&database_url).await?;

    if database_url.starts_with("sqlite::memory:") {
        Migrator::up(&db, None).await?;
    } else {
        // Persistent databases keep rows between runs
        Migrator::fresh(&db).await?;
    }

    Ok(db)
}

pub async fn setup_test_app() -> Router {
    let db = setup_test_db()
        .await
        .expect("Failed to setup test database");
    create_router(db, &AppConfig::default())
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    #[allow(dead_code)]
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    #[allow(dead_code)]
    pub fn content_range(&self) -> Option<&str> {
        self.headers
            .get("Content-Range")
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "Response body is not JSON ({status}): {}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    match body {
        Some(body) => {
            let content_type = Some("application/json");
            send_raw(app, method, uri, content_type, body.to_string()).await
        }
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

#[allow(dead_code)]
pub fn station_json(code: &str, name: &str) -> Value {
    json!({
        "code": code,
        "name": name,
        "initial": code,
    })
}

#[allow(dead_code)]
pub fn train_json(code: &str, name: &str) -> Value {
    json!({
        "code_train": code,
        "name": name,
        "route": "Gambir - Surabaya Pasarturi",
        "status": "available",
    })
}

#[allow(dead_code)]
pub fn carriage_json(train_id: i64, name: &str, class: &str) -> Value {
    json!({
        "train_id": train_id,
        "name": name,
        "class": class,
        "price": 450_000,
        "seat_count": 50,
    })
}

/// Create a train and return its id.
#[allow(dead_code)]
pub async fn create_train(app: &Router, code: &str) -> i64 {
    let body = train_json(code, "Argo Bromo Anggrek");
    let response = send(app, Method::POST, "/trains", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.data()["train_id"].as_i64().unwrap()
}
