use axum::http::header::HeaderMap;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::response::Meta;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
/// Largest offset the SQL drivers accept (they bind it as `i64`).
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Raw `?page=N&limit=M` query parameters.
///
/// Kept as strings so that malformed values fall back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, 1-based. Defaults to 1.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Items per page. Defaults to 10, capped at 100.
    #[param(example = "10")]
    pub limit: Option<String>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    #[must_use]
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// `(page - 1) * limit`, capped at [`MAX_OFFSET`].
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_OFFSET)
    }

    #[must_use]
    pub fn meta(&self, count: u64) -> Meta {
        Meta {
            page: self.page,
            limit: self.limit,
            count,
        }
    }
}

impl From<&PageQuery> for Pagination {
    fn from(query: &PageQuery) -> Self {
        let page = parse_positive(query.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(query.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        Self::new(page, limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}

/// Sanitize resource name by removing control characters for HTTP headers
fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Build the `Content-Range` header of a list response,
/// e.g. `trains 0-9/42`.
///
/// An empty page is reported as `trains */42`.
#[must_use]
pub fn calculate_content_range(
    pagination: Pagination,
    returned: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let safe_name = sanitize_resource_name(resource_name);
    let offset = pagination.offset();

    let content_range = if returned == 0 {
        format!("{safe_name} */{total_count}")
    } else {
        let last = offset.saturating_add(returned - 1);
        format!("{safe_name} {offset}-{last}/{total_count}")
    };

    let mut headers = HeaderMap::new();
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    }
    headers
}
