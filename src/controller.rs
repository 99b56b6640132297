//! Generic Axum handlers shared by every resource.
//!
//! Each handler parses the request, calls the resource's usecase and wraps
//! the outcome in an envelope. Failures of any kind become a 400
//! [`ApiError`].

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    routing::get,
};
use sea_orm::DbErr;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::core::Resource;
use crate::errors::ApiError;
use crate::pagination::{PageQuery, Pagination, calculate_content_range};
use crate::response::{Envelope, PaginatedEnvelope};
use crate::usecase::ResourceUsecase;

/// Routes of one resource, relative to its mount point:
///
/// | method | path | handler |
/// |---|---|---|
/// | GET | `/` | paginated list |
/// | POST | `/` | create one (object body) or many (array body) |
/// | GET | `/{id}` | get by id |
/// | PUT | `/{id}` | full update |
/// | DELETE | `/{id}` | delete |
pub fn router<R: Resource>(usecase: ResourceUsecase<R>) -> Router {
    Router::new()
        .route("/", get(get_all::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
        )
        .with_state(usecase)
}

/// A create body: either one input object or an array of them.
#[derive(Debug, PartialEq, Eq)]
pub enum Batch<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: DeserializeOwned> Batch<T> {
    /// # Errors
    ///
    /// Returns the serde error of the first element that does not match `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
                .map(Self::Many),
            other => serde_json::from_value(other).map(Self::One),
        }
    }
}

/// Payload of a create response, mirroring the shape of the request body.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Created<R> {
    One(R),
    Many(Vec<R>),
}

fn parse_id<R: Resource>(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse().map_err(|_| {
        ApiError::invalid_id(format!("Invalid {} id", R::RESOURCE_NAME_SINGULAR), raw)
    })
}

fn bind_failed<R: Resource>() -> String {
    format!("Failed binding {}", R::RESOURCE_NAME_SINGULAR)
}

pub async fn get_all<R: Resource>(
    State(usecase): State<ResourceUsecase<R>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<(HeaderMap, Json<PaginatedEnvelope<R>>), ApiError> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let pagination = Pagination::from(&query);

    let failed = format!("Failed to get all {}", R::RESOURCE_NAME_PLURAL);
    let (items, count) = usecase
        .get_all(pagination)
        .await
        .map_err(|err| ApiError::database(failed, err))?;

    let headers = calculate_content_range(
        pagination,
        items.len() as u64,
        count,
        R::RESOURCE_NAME_PLURAL,
    );
    let envelope = PaginatedEnvelope::new(
        StatusCode::OK,
        format!("Successfully get all {}", R::RESOURCE_NAME_PLURAL),
        items,
        pagination.meta(count),
    );
    Ok((headers, Json(envelope)))
}

pub async fn get_by_id<R: Resource>(
    State(usecase): State<ResourceUsecase<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope<R>>, ApiError> {
    let id = parse_id::<R>(&raw_id)?;
    let failed = format!("Failed to get {} by id", R::RESOURCE_NAME_SINGULAR);
    let item = usecase
        .get_by_id(id)
        .await
        .map_err(|err| ApiError::database(failed, err))?;

    Ok(Json(Envelope::new(
        StatusCode::OK,
        format!("Successfully get {} by id", R::RESOURCE_NAME_SINGULAR),
        item,
    )))
}

pub async fn create<R: Resource>(
    State(usecase): State<ResourceUsecase<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Created<R>>>), ApiError> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::bind(bind_failed::<R>(), rejection.body_text()))?;
    let batch = Batch::<R::InputModel>::from_value(body)
        .map_err(|err| ApiError::bind(bind_failed::<R>(), err))?;

    let failed = format!("Failed to create a {}", R::RESOURCE_NAME_SINGULAR);
    let (created, message) = match batch {
        Batch::One(input) => {
            let item = usecase
                .create(input)
                .await
                .map_err(|err| ApiError::database(failed, err))?;
            (
                Created::One(item),
                format!("Successfully created a {}", R::RESOURCE_NAME_SINGULAR),
            )
        }
        Batch::Many(inputs) if inputs.is_empty() => return Err(ApiError::empty_batch(failed)),
        Batch::Many(inputs) => {
            let items = usecase
                .create_many(inputs)
                .await
                .map_err(|err| ApiError::database(failed, err))?;
            let message = format!(
                "Successfully created {} {}",
                items.len(),
                R::RESOURCE_NAME_PLURAL
            );
            (Created::Many(items), message)
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(StatusCode::CREATED, message, created)),
    ))
}

pub async fn update<R: Resource>(
    State(usecase): State<ResourceUsecase<R>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<R::InputModel>, JsonRejection>,
) -> Result<Json<Envelope<R>>, ApiError> {
    let Json(input) =
        payload.map_err(|rejection| ApiError::bind(bind_failed::<R>(), rejection.body_text()))?;
    let id = parse_id::<R>(&raw_id)?;

    let name = R::RESOURCE_NAME_SINGULAR;
    let item = usecase.update(id, input).await.map_err(|err| match err {
        DbErr::RecordNotFound(_) => ApiError::database(format!("Failed to get {name} by id"), err),
        _ => ApiError::database(format!("Failed to update a {name}"), err),
    })?;

    Ok(Json(Envelope::new(
        StatusCode::OK,
        format!("Successfully updated {}", R::RESOURCE_NAME_SINGULAR),
        item,
    )))
}

pub async fn delete<R: Resource>(
    State(usecase): State<ResourceUsecase<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = parse_id::<R>(&raw_id)?;
    let failed = format!("Failed to delete {}", R::RESOURCE_NAME_SINGULAR);
    usecase
        .delete(id)
        .await
        .map_err(|err| ApiError::database(failed, err))?;

    Ok(Json(Envelope::empty(
        StatusCode::OK,
        format!("Successfully deleted {}", R::RESOURCE_NAME_SINGULAR),
    )))
}
