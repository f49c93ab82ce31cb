//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from persistence.
//! The `zoooom-adapters` crate provides implementations.

use crate::domain::{Tag, Template, Uid};
use crate::error::ZoooomResult;

/// Restricts which templates a listing may return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// `None` means every template; `Some` limits the listing to these ids.
    pub template_ids: Option<Vec<i64>>,
}

impl TemplateFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn ids(ids: Vec<i64>) -> Self {
        Self {
            template_ids: Some(ids),
        }
    }

    pub fn admits(&self, id: i64) -> bool {
        self.template_ids
            .as_ref()
            .is_none_or(|ids| ids.contains(&id))
    }
}

/// Port for template persistence.
///
/// Implemented by:
/// - `zoooom_adapters::InMemoryTemplateRepository`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRepository: Send + Sync {
    /// One page of templates admitted by `filter`, newest first, plus the
    /// number of admitted templates before paging.
    fn list(
        &self,
        filter: &TemplateFilter,
        limit: i64,
        offset: i64,
    ) -> ZoooomResult<(Vec<Template>, i64)>;

    /// Look a template up by its external identifier.
    fn find_by_uid(&self, uid: &Uid) -> ZoooomResult<Option<Template>>;

    /// Insert a draft, returning it with id, uid and timestamps assigned.
    fn store(&self, template: Template) -> ZoooomResult<Template>;
}

/// Port for tag persistence.
///
/// Implemented by:
/// - `zoooom_adapters::InMemoryTagRepository`
#[cfg_attr(test, mockall::automock)]
pub trait TagRepository: Send + Sync {
    /// Tags whose title contains `keyword`, ignoring case.
    fn search(&self, keyword: &str) -> ZoooomResult<Vec<Tag>>;

    /// Tags for the given ids, in the order of `ids`. Unknown ids are skipped.
    fn find_by_ids(&self, ids: &[i64]) -> ZoooomResult<Vec<Tag>>;

    /// The tag titled `title` (trimmed), inserting it if absent.
    ///
    /// Lookup and insert are one atomic step, so concurrent callers with the
    /// same title get the same row.
    fn find_or_create(&self, title: &str) -> ZoooomResult<Tag>;
}

/// Port for the template/tag association.
///
/// Implemented by:
/// - `zoooom_adapters::InMemoryTemplateTagRepository`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateTagRepository: Send + Sync {
    /// Associate a tag with a template. Linking an existing pair is a no-op.
    fn link(&self, template_id: i64, tag_id: i64) -> ZoooomResult<()>;

    /// Tag ids linked to a template, in link order.
    fn tag_ids_for(&self, template_id: i64) -> ZoooomResult<Vec<i64>>;

    /// Distinct template ids linked to any of the given tags.
    fn template_ids_for(&self, tag_ids: &[i64]) -> ZoooomResult<Vec<i64>>;
}
