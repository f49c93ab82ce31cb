// ============================================================================
// domain/error.rs - DOMAIN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every domain error is a rule violation in caller-supplied data, so all of
/// them land in the validation category (400-level equivalent).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid uid: {0}")]
    InvalidUid(String),

    #[error("Invalid pagination: {field} must be at least 1, got {value}")]
    InvalidPagination { field: &'static str, value: i64 },
}

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplate(_)
            | Self::InvalidTag(_)
            | Self::InvalidUid(_)
            | Self::InvalidPagination { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
