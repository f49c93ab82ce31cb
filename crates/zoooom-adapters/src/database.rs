//! Shared in-memory tables.
//!
//! [`InMemoryDatabase`] plays the part a SQL connection handle plays for a
//! real store: one handle, cloned into every repository, all of them seeing
//! the same rows.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use zoooom_core::{
    application::ApplicationError,
    domain::{Tag, Template, TemplateTag},
    error::ZoooomResult,
};

use crate::repository::{
    InMemoryTagRepository, InMemoryTemplateRepository, InMemoryTemplateTagRepository,
};

/// Rows of every table, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub templates: Vec<Template>,
    pub tags: Vec<Tag>,
    pub template_tags: Vec<TemplateTag>,
}

impl Tables {
    pub fn next_template_id(&self) -> i64 {
        self.templates.last().map_or(1, |t| t.id + 1)
    }

    pub fn next_tag_id(&self) -> i64 {
        self.tags.last().map_or(1, |t| t.id + 1)
    }
}

/// Thread-safe in-memory database handle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_repository(&self) -> InMemoryTemplateRepository {
        InMemoryTemplateRepository::new(self.clone())
    }

    pub fn tag_repository(&self) -> InMemoryTagRepository {
        InMemoryTagRepository::new(self.clone())
    }

    pub fn template_tag_repository(&self) -> InMemoryTemplateTagRepository {
        InMemoryTemplateTagRepository::new(self.clone())
    }

    /// Number of stored templates.
    pub fn template_count(&self) -> ZoooomResult<usize> {
        Ok(self.read()?.templates.len())
    }

    /// Number of stored tags.
    pub fn tag_count(&self) -> ZoooomResult<usize> {
        Ok(self.read()?.tags.len())
    }

    pub(crate) fn read(&self) -> ZoooomResult<RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    pub(crate) fn write(&self) -> ZoooomResult<RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoooom_core::application::ports::{TagRepository, TemplateRepository};

    #[test]
    fn repositories_share_tables() {
        let db = InMemoryDatabase::new();
        db.template_repository()
            .store(Template::draft(1, false, "", ""))
            .unwrap();
        db.tag_repository().find_or_create("x").unwrap();

        let other = db.clone();
        assert_eq!(other.template_count().unwrap(), 1);
        assert_eq!(other.tag_count().unwrap(), 1);
    }

    #[test]
    fn sequences_start_at_one() {
        let tables = Tables::default();
        assert_eq!(tables.next_template_id(), 1);
        assert_eq!(tables.next_tag_id(), 1);
    }
}
