//! Error handling for the Zoooom server.
//!
//! Two error types live here:
//! - [`ServerError`]: startup and shutdown failures, mapped to exit codes
//! - [`ApiError`]: a request failure, rendered as `{"error": ...}` with the
//!   status the core error maps to

use std::error::Error;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use zoooom_core::{application::Status, error::ZoooomError};

// Re-export so callers only need `use crate::error::*`.
pub use zoooom_core::error::ErrorCategory as CoreCategory;

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Failures outside of request handling.
#[derive(Debug, Error)]
pub enum ServerError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The seed file could not be loaded.
    #[error("Seeding failed: {message}")]
    Seed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `zoooom-core`.
    #[error("Use case failed: {0}")]
    Core(#[from] ZoooomError),

    // ── System errors ──────────────────────────────────────────────────────
    /// The listener could not be bound.
    #[error("Failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl ServerError {
    /// Get the error category for exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } | Self::Seed { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::Configuration,
                CoreCategory::NotFound | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Bind { .. } | Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Plain-text rendering for stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        } else {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad configuration or seed data.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── ApiError ──────────────────────────────────────────────────────────────────

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A core error on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ZoooomError);

impl<E> From<E> for ApiError
where
    E: Into<ZoooomError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = http_status(self.0.status());
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Map a use case status onto the wire status.
pub fn http_status(status: Status) -> StatusCode {
    StatusCode::from_u16(status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use zoooom_core::{application::ApplicationError, domain::DomainError};

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            ServerError::Config {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_bind_is_internal() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:1".into(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn invalid_seed_data_is_configuration() {
        let err = ServerError::from(ZoooomError::from(DomainError::InvalidTag(
            "title cannot be empty".into(),
        )));
        assert_eq!(err.exit_code(), 4);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:80".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Error: Failed to bind 0.0.0.0:80"));
        assert!(s.contains("Caused by: denied"));
        assert!(!s.contains("--verbose"));
    }

    // ── ApiError ──────────────────────────────────────────────────────────

    #[test]
    fn statuses_map_to_http() {
        assert_eq!(http_status(Status::Ok), StatusCode::OK);
        assert_eq!(http_status(Status::Created), StatusCode::CREATED);
        assert_eq!(http_status(Status::BadRequest), StatusCode::BAD_REQUEST);
        assert_eq!(http_status(Status::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            http_status(Status::InternalServerError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_renders_404() {
        let err = ApiError::from(ApplicationError::TemplateNotFound {
            uid: "abc".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn lock_failure_renders_500() {
        let err = ApiError::from(ApplicationError::StoreLockError);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
