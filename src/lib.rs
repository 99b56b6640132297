//! # transit-api
//!
//! CRUD REST backend for rail transit data built on Axum and Sea-ORM.
//!
//! Every resource (stations, trains, train carriages) goes through the same
//! layers:
//!
//! - **controller**: generic Axum handlers that parse the request and wrap
//!   results in JSON envelopes
//! - **usecase**: per-resource service turning inputs into active models
//! - **repository**: one Sea-ORM call per operation
//!
//! A resource only has to implement [`Resource`] to get all five endpoints.
//!
//! ```rust,ignore
//! let db = sea_orm::Database::connect("sqlite::memory:").await?;
//! Migrator::up(&db, None).await?;
//! let app = transit_api::routes::create_router(db, &config);
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod migration;
pub mod openapi;
pub mod pagination;
pub mod repository;
pub mod response;
pub mod routes;
pub mod usecase;

pub use config::AppConfig;
pub use core::{MergeIntoActiveModel, Resource};
pub use errors::{ApiError, AppError};
pub use migration::Migrator;
pub use usecase::ResourceUsecase;
