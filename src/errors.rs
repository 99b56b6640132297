//! # Error handling
//!
//! [`ApiError`] is the only error type handlers return. Whatever went wrong
//! (unparsable body, bad path id, missing row, constraint violation) the
//! client receives HTTP 400 and the error envelope:
//!
//! ```json
//! {"code": 400, "message": "Failed to get train by id", "errors": "train not found"}
//! ```
//!
//! The variants only exist so that logging can tell client mistakes
//! (`debug`) from database failures (`error`).
//!
//! [`AppError`] covers everything that can stop the binary from starting.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use std::fmt;

use crate::response::ErrorEnvelope;

#[derive(Debug)]
pub enum ApiError {
    /// The JSON body could not be read or deserialised.
    Bind {
        /// User-facing summary, e.g. "Failed binding train"
        message: String,
        /// Extractor or serde error text
        detail: String,
    },

    /// The `{id}` path segment is not an integer.
    InvalidId {
        message: String,
        /// The raw path segment
        raw: String,
    },

    /// A batch create was sent an empty array.
    EmptyBatch { message: String },

    /// Any error coming back from the repository.
    Database {
        message: String,
        internal: DbErr,
    },
}

impl ApiError {
    pub fn bind(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::Bind {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn invalid_id(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
            raw: raw.into(),
        }
    }

    pub fn empty_batch(message: impl Into<String>) -> Self {
        Self::EmptyBatch {
            message: message.into(),
        }
    }

    /// Wrap a repository error with the message of the failed operation.
    ///
    /// # Example
    /// ```rust,ignore
    /// usecase
    ///     .get_by_id(id)
    ///     .await
    ///     .map_err(|err| ApiError::database("Failed to get train by id", err))?;
    /// ```
    pub fn database(message: impl Into<String>, internal: DbErr) -> Self {
        Self::Database {
            message: message.into(),
            internal,
        }
    }

    /// Every failure is reported as a bad request.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// The generic message of the failed operation.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Bind { message, .. }
            | Self::InvalidId { message, .. }
            | Self::EmptyBatch { message }
            | Self::Database { message, .. } => message,
        }
    }

    /// The underlying error text sent along with the message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Bind { detail, .. } => detail.clone(),
            Self::InvalidId { raw, .. } => format!("'{raw}' is not a valid id"),
            Self::EmptyBatch { .. } => "at least one record is required".to_string(),
            Self::Database { internal, .. } => internal.to_string(),
        }
    }

    fn log(&self) {
        match self {
            Self::Database {
                internal: DbErr::RecordNotFound(_),
                message,
            } => {
                tracing::debug!(message = %message, error = %self.detail(), "Record not found");
            }
            Self::Database { internal, message } => {
                tracing::error!(message = %message, error = ?internal, "Database error occurred");
            }
            _ => {
                tracing::debug!(
                    message = %self.message(),
                    error = %self.detail(),
                    "Rejected request"
                );
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = ErrorEnvelope::new(status, self.message(), self.detail());

        (status, Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.detail())
    }
}

impl std::error::Error for ApiError {}

/// Failures while bootstrapping the server.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
