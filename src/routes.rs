use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_scalar::{Scalar, Servable};

use crate::config::AppConfig;
use crate::controller;
use crate::core::Resource;
use crate::entities::{Station, Train, TrainCarriage};
use crate::openapi;
use crate::usecase::ResourceUsecase;

/// Mount one resource under `/{R::ROUTE}`.
fn mount<R: Resource>(router: Router, db: &DatabaseConnection) -> Router {
    let usecase = ResourceUsecase::<R>::with_connection(db.clone());
    router.nest(&format!("/{}", R::ROUTE), controller::router(usecase))
}

/// Build the complete application router.
///
/// ```text
/// /stations, /trains, /train-carriages   CRUD endpoints
/// /health                                 database ping
/// /api-docs/openapi.json                  OpenAPI document
/// /docs                                   Scalar UI
/// ```
pub fn create_router(db: DatabaseConnection, config: &AppConfig) -> Router {
    let mut router = Router::new();
    router = mount::<Station>(router, &db);
    router = mount::<Train>(router, &db);
    router = mount::<TrainCarriage>(router, &db);

    let apidocs = openapi::build();
    let router = router
        .merge(
            Router::new()
                .route("/health", get(health))
                .with_state(db),
        )
        .route(
            "/api-docs/openapi.json",
            get({
                let apidocs = apidocs.clone();
                move || async move { Json(apidocs) }
            }),
        )
        .merge(Scalar::with_url("/docs", apidocs))
        .layer(TraceLayer::new_for_http());

    if config.cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn health(State(db): State<DatabaseConnection>) -> (StatusCode, Json<Value>) {
    match db.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::error!(error = %err, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
