//! Application layer errors.
//!
//! These errors represent failures in orchestration and persistence, not
//! business rules. Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No template carries the requested uid.
    #[error("Template not found: {uid}")]
    TemplateNotFound { uid: String },

    /// A link points at a tag that no longer exists.
    #[error("Tag not found: {id}")]
    TagNotFound { id: i64 },

    /// Store access failed (lock poisoned, etc.).
    #[error("Repository store error")]
    StoreLockError,

    /// The backing store rejected an operation.
    #[error("Persistence failed: {reason}")]
    PersistenceFailed { reason: String },
}

impl ApplicationError {
    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TagNotFound { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::PersistenceFailed { .. } => ErrorCategory::Internal,
        }
    }
}
