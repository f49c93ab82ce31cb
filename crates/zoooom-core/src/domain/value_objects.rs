//! Domain value objects.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ── Uid ──────────────────────────────────────────────────────────────────────

/// Externally visible unique identifier of a template.
///
/// Invariant: a `Uid` obtained through `try_new`, `generate` or `FromStr` is
/// never blank. `Uid::unassigned()` is the one exception, used by drafts that
/// have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    /// Fallible constructor.
    pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidUid("uid cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Fresh random uid, assigned by persistence on insert.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Placeholder carried by drafts.
    pub const fn unassigned() -> Self {
        Self(String::new())
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Uid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl AsRef<str> for Uid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
