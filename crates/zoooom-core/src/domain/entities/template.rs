//! Template entity.
//!
//! A template is a design-pattern instance a user generated: the pattern it
//! was built from, two image URLs, and a privacy flag. Persistence owns the
//! identity fields (`id`, `uid`) and the timestamps; everything else comes
//! from the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::Uid};

/// In-memory representation of a persisted template record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub uid: Uid,
    pub design_pattern_id: i64,
    pub is_private: bool,
    pub background_url: String,
    pub generated_sample_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// A template that has not been stored yet.
    ///
    /// Identity is zeroed and timestamps sit at the Unix epoch until the
    /// repository assigns them.
    pub fn draft(
        design_pattern_id: i64,
        is_private: bool,
        background_url: impl Into<String>,
        generated_sample_url: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            uid: Uid::unassigned(),
            design_pattern_id,
            is_private,
            background_url: background_url.into(),
            generated_sample_url: generated_sample_url.into(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Whether persistence has assigned an identity.
    pub fn is_persisted(&self) -> bool {
        self.id > 0 && self.uid.is_assigned()
    }

    /// Stamp identity and timestamps onto a draft.
    pub fn assign_identity(mut self, id: i64, uid: Uid, now: DateTime<Utc>) -> Self {
        self.id = id;
        self.uid = uid;
        self.created_at = now;
        self.updated_at = now;
        self
    }

    /// Check the rules a draft must satisfy before it is stored.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.design_pattern_id < 0 {
            return Err(DomainError::InvalidTemplate(format!(
                "design_pattern_id cannot be negative, got {}",
                self.design_pattern_id
            )));
        }
        if self.is_persisted() {
            return Err(DomainError::InvalidTemplate(format!(
                "template {} already has an identity",
                self.uid
            )));
        }
        Ok(())
    }
}
