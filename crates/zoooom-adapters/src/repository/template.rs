use chrono::Utc;
use tracing::debug;

use zoooom_core::{
    application::ports::{TemplateFilter, TemplateRepository},
    domain::{Template, Uid},
    error::ZoooomResult,
};

use crate::database::InMemoryDatabase;

/// Template table adapter.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateRepository {
    db: InMemoryDatabase,
}

impl InMemoryTemplateRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn list(
        &self,
        filter: &TemplateFilter,
        limit: i64,
        offset: i64,
    ) -> ZoooomResult<(Vec<Template>, i64)> {
        let tables = self.db.read()?;

        let admitted: Vec<&Template> = tables
            .templates
            .iter()
            .rev()
            .filter(|t| filter.admits(t.id))
            .collect();
        let total = admitted.len() as i64;

        let page = admitted
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect();

        Ok((page, total))
    }

    fn find_by_uid(&self, uid: &Uid) -> ZoooomResult<Option<Template>> {
        let tables = self.db.read()?;
        Ok(tables.templates.iter().find(|t| &t.uid == uid).cloned())
    }

    fn store(&self, template: Template) -> ZoooomResult<Template> {
        let mut tables = self.db.write()?;

        let mut uid = Uid::generate();
        while tables.templates.iter().any(|t| t.uid == uid) {
            uid = Uid::generate();
        }

        let stored = template.assign_identity(tables.next_template_id(), uid, Utc::now());
        tables.templates.push(stored.clone());

        debug!(id = stored.id, "Template row inserted");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with(n: i64) -> InMemoryTemplateRepository {
        let repo = InMemoryDatabase::new().template_repository();
        for i in 1..=n {
            repo.store(Template::draft(i, false, format!("bg-{i}"), ""))
                .unwrap();
        }
        repo
    }

    #[test]
    fn store_assigns_sequential_ids_and_uids() {
        let repo = repo_with(2);
        let (all, _) = repo.list(&TemplateFilter::all(), 10, 0).unwrap();
        let ids: Vec<_> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 1]);
        assert!(all.iter().all(Template::is_persisted));
        assert_ne!(all[0].uid, all[1].uid);
    }

    #[test]
    fn list_pages_newest_first() {
        let repo = repo_with(25);
        let (page, total) = repo.list(&TemplateFilter::all(), 10, 20).unwrap();
        assert_eq!(total, 25);
        let ids: Vec<_> = page.iter().map(|t| t.id).collect();
        assert_eq!(ids, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn list_past_the_end_is_empty_but_counts() {
        let repo = repo_with(3);
        let (page, total) = repo.list(&TemplateFilter::all(), 10, 30).unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 3);
    }

    #[test]
    fn filter_restricts_ids_and_total() {
        let repo = repo_with(5);
        let (page, total) = repo.list(&TemplateFilter::ids(vec![2, 4]), 10, 0).unwrap();
        assert_eq!(total, 2);
        assert_eq!(page.iter().map(|t| t.id).collect::<Vec<_>>(), [4, 2]);
    }

    #[test]
    fn find_by_uid_round_trips() {
        let repo = InMemoryDatabase::new().template_repository();
        let stored = repo.store(Template::draft(9, true, "a", "b")).unwrap();
        let found = repo.find_by_uid(&stored.uid).unwrap();
        assert_eq!(found, Some(stored));
        assert_eq!(
            repo.find_by_uid(&Uid::try_new("missing").unwrap()).unwrap(),
            None
        );
    }
}
