use zoooom_core::{
    application::{ApplicationError, ports::TemplateTagRepository},
    domain::TemplateTag,
    error::ZoooomResult,
};

use crate::database::InMemoryDatabase;

/// Join table adapter.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateTagRepository {
    db: InMemoryDatabase,
}

impl InMemoryTemplateTagRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

impl TemplateTagRepository for InMemoryTemplateTagRepository {
    fn link(&self, template_id: i64, tag_id: i64) -> ZoooomResult<()> {
        let mut tables = self.db.write()?;

        if !tables.templates.iter().any(|t| t.id == template_id) {
            return Err(ApplicationError::PersistenceFailed {
                reason: format!("template {template_id} does not exist"),
            }
            .into());
        }
        if !tables.tags.iter().any(|t| t.id == tag_id) {
            return Err(ApplicationError::PersistenceFailed {
                reason: format!("tag {tag_id} does not exist"),
            }
            .into());
        }

        let link = TemplateTag::new(template_id, tag_id);
        if !tables.template_tags.contains(&link) {
            tables.template_tags.push(link);
        }
        Ok(())
    }

    fn tag_ids_for(&self, template_id: i64) -> ZoooomResult<Vec<i64>> {
        let tables = self.db.read()?;
        Ok(tables
            .template_tags
            .iter()
            .filter(|l| l.template_id == template_id)
            .map(|l| l.tag_id)
            .collect())
    }

    fn template_ids_for(&self, tag_ids: &[i64]) -> ZoooomResult<Vec<i64>> {
        let tables = self.db.read()?;
        let mut ids: Vec<i64> = Vec::new();
        for link in tables
            .template_tags
            .iter()
            .filter(|l| tag_ids.contains(&l.tag_id))
        {
            if !ids.contains(&link.template_id) {
                ids.push(link.template_id);
            }
        }
        Ok(ids)
    }
}
