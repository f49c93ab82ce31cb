use tracing::debug;

use zoooom_core::{
    application::ports::TagRepository,
    domain::Tag,
    error::ZoooomResult,
};

use crate::database::InMemoryDatabase;

/// Tag table adapter. Titles are unique.
#[derive(Debug, Clone)]
pub struct InMemoryTagRepository {
    db: InMemoryDatabase,
}

impl InMemoryTagRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

impl TagRepository for InMemoryTagRepository {
    fn search(&self, keyword: &str) -> ZoooomResult<Vec<Tag>> {
        let needle = keyword.to_lowercase();
        let tables = self.db.read()?;
        Ok(tables
            .tags
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn find_by_ids(&self, ids: &[i64]) -> ZoooomResult<Vec<Tag>> {
        let tables = self.db.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| tables.tags.iter().find(|t| t.id == *id))
            .cloned()
            .collect())
    }

    fn find_or_create(&self, title: &str) -> ZoooomResult<Tag> {
        let title = title.trim();
        let mut tables = self.db.write()?;

        if let Some(existing) = tables.tags.iter().find(|t| t.title == title) {
            return Ok(existing.clone());
        }

        let stored = Tag {
            id: tables.next_tag_id(),
            title: title.to_string(),
        };
        tables.tags.push(stored.clone());

        debug!(id = stored.id, title = %stored.title, "Tag row inserted");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Barrier, thread};

    fn repo() -> InMemoryTagRepository {
        let repo = InMemoryDatabase::new().tag_repository();
        for title in ["Retro", "neon", "retrowave"] {
            repo.find_or_create(title).unwrap();
        }
        repo
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let found = repo().search("RETRO").unwrap();
        let titles: Vec<_> = found.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Retro", "retrowave"]);
    }

    #[test]
    fn find_by_ids_follows_requested_order_and_skips_unknown() {
        let tags = repo().find_by_ids(&[3, 99, 1]).unwrap();
        assert_eq!(tags.iter().map(|t| t.id).collect::<Vec<_>>(), [3, 1]);
    }

    #[test]
    fn find_or_create_trims_and_reuses() {
        let repo = InMemoryDatabase::new().tag_repository();
        let stored = repo.find_or_create("  pop ").unwrap();
        assert_eq!(stored, Tag { id: 1, title: "pop".into() });

        assert_eq!(repo.find_or_create("pop").unwrap(), stored);
        assert_eq!(repo.find_or_create("Pop").unwrap().id, 2);
    }

    #[test]
    fn concurrent_find_or_create_yields_one_row() {
        let db = InMemoryDatabase::new();
        let barrier = Barrier::new(8);

        let ids: Vec<i64> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let repo = db.tag_repository();
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        repo.find_or_create("fresh").unwrap().id
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(ids.iter().all(|id| *id == 1));
        assert_eq!(db.tag_count().unwrap(), 1);
    }
}
