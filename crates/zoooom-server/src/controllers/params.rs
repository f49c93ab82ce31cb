//! Query string parsing for the listing endpoint.

use std::str::FromStr;

use serde::Deserialize;
use zoooom_core::domain::DomainError;

use crate::config::PaginationConfig;

/// Raw `GET /templates` query.  Values stay strings so that a malformed
/// number never rejects the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexQuery {
    pub pages: Option<String>,
    pub limit: Option<String>,
    pub keyword: Option<String>,
}

/// A parsed parameter and whether it came from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub valid: bool,
}

/// Parse `raw`, falling back to `default` when it is absent or malformed.
pub fn parse_or_default<T: FromStr>(raw: Option<&str>, default: T) -> Parsed<T> {
    match raw.map(|s| s.trim().parse::<T>()) {
        Some(Ok(value)) => Parsed { value, valid: true },
        _ => Parsed {
            value: default,
            valid: false,
        },
    }
}

/// The resolved listing window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub keyword: String,
}

impl PageRequest {
    /// Resolve a query against the configured defaults.
    ///
    /// Unparseable numbers fall back silently; numbers below 1 are rejected.
    pub fn resolve(query: &IndexQuery, defaults: PaginationConfig) -> Result<Self, DomainError> {
        let page = parse_or_default(query.pages.as_deref(), defaults.default_page);
        let limit = parse_or_default(query.limit.as_deref(), defaults.default_limit);
        if !page.valid || !limit.valid {
            tracing::debug!(
                pages = ?query.pages,
                limit = ?query.limit,
                "Using default pagination"
            );
        }

        if page.value < 1 {
            return Err(DomainError::InvalidPagination {
                field: "pages",
                value: page.value,
            });
        }
        if limit.value < 1 {
            return Err(DomainError::InvalidPagination {
                field: "limit",
                value: limit.value,
            });
        }

        Ok(Self {
            page: page.value,
            limit: limit.value,
            keyword: query.keyword.clone().unwrap_or_default(),
        })
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> i64 {
        self.limit.saturating_mul(self.page - 1)
    }

    /// Number of pages needed to show `total` rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        (total as f64 / self.limit as f64).ceil() as i64
    }
}
