//! JSON envelopes wrapped around every response body.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{code, message, data}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Envelope whose `data` serialises as `null`.
    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

/// Pagination details attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 10)]
    pub limit: u64,
    /// Total number of records, across all pages.
    #[schema(example = 42)]
    pub count: u64,
}

/// `{code, message, data, meta}`
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    pub code: u16,
    pub message: String,
    pub data: Vec<T>,
    pub meta: Meta,
}

impl<T> PaginatedEnvelope<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Vec<T>, meta: Meta) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
            meta,
        }
    }
}

/// `{code, message, errors}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(example = 400)]
    pub code: u16,
    #[schema(example = "Failed to get train by id")]
    pub message: String,
    /// Raw text of the underlying error.
    #[schema(example = "RecordNotFound Error: train not found")]
    pub errors: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>, errors: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            errors: errors.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_serialises_data() {
        let envelope = Envelope::new(
            StatusCode::CREATED,
            "Successfully created a train",
            json!({"train_id": 1}),
        );
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"code": 201, "message": "Successfully created a train", "data": {"train_id": 1}})
        );
    }

    #[test]
    fn empty_envelope_has_null_data() {
        let envelope = Envelope::empty(StatusCode::OK, "Successfully deleted train");
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(value["code"], 200);
        assert!(value["data"].is_null());
    }

    #[test]
    fn paginated_envelope_carries_meta() {
        let meta = Meta {
            page: 2,
            limit: 5,
            count: 12,
        };
        let envelope =
            PaginatedEnvelope::new(StatusCode::OK, "Successfully get all trains", vec![1, 2], meta);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["meta"], json!({"page": 2, "limit": 5, "count": 12}));
        assert_eq!(value["data"], json!([1, 2]));
    }
}
