//! Unified error handling for Zoooom Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, and maps each failure onto the status the HTTP layer reports.

use thiserror::Error;

use crate::application::{ApplicationError, Status};
use crate::domain::DomainError;

/// Root error type for Zoooom Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZoooomError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and persistence failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ZoooomError {
    /// Get error category for status mapping and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Status the caller should report for this failure.
    pub fn status(&self) -> Status {
        match self.category() {
            ErrorCategory::Validation => Status::BadRequest,
            ErrorCategory::NotFound => Status::NotFound,
            ErrorCategory::Internal => Status::InternalServerError,
        }
    }
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ZoooomResult<T> = Result<T, ZoooomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err: ZoooomError = ApplicationError::TemplateNotFound {
            uid: "missing".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.status(), Status::NotFound);
    }

    #[test]
    fn validation_maps_to_400() {
        let err: ZoooomError = DomainError::InvalidTag("empty title".into()).into();
        assert_eq!(err.status(), Status::BadRequest);
    }

    #[test]
    fn lock_error_is_internal() {
        let err: ZoooomError = ApplicationError::StoreLockError.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.status(), Status::InternalServerError);
    }

    #[test]
    fn display_is_transparent_for_wrapped_errors() {
        let err: ZoooomError = ApplicationError::TemplateNotFound { uid: "abc".into() }.into();
        assert_eq!(err.to_string(), "Template not found: abc");
    }
}
