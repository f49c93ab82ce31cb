use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A label attached to templates through [`super::TemplateTag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub title: String,
}

impl Tag {
    /// A tag that has not been stored yet.
    pub fn draft(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Title with surrounding whitespace removed; the form that is stored.
    pub fn normalized_title(&self) -> &str {
        self.title.trim()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.normalized_title().is_empty() {
            return Err(DomainError::InvalidTag("title cannot be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_invalid() {
        assert!(Tag::draft("   ").validate().is_err());
        assert!(Tag::draft("").validate().is_err());
    }

    #[test]
    fn normalized_title_trims() {
        assert_eq!(Tag::draft("  retro ").normalized_title(), "retro");
    }
}
