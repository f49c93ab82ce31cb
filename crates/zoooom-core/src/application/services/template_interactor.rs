//! Template Interactor - the templates use case.
//!
//! This service coordinates the three repository ports:
//! 1. List templates a page at a time, optionally narrowed by tag keyword
//! 2. Fetch one template and its tags by uid
//! 3. Find-or-create the tags, store the template, then link them
//!
//! Every call returns its status alongside the value (see [`Outcome`]), so a
//! single interactor can be shared by concurrent requests.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, Outcome,
        ports::{TagRepository, TemplateFilter, TemplateRepository, TemplateTagRepository},
    },
    domain::{DomainValidator as validator, Tag, Template, Uid},
    error::ZoooomResult,
};

/// A template together with its tags, in link order.
pub type TemplateWithTags = (Template, Vec<Tag>);

/// One page of a template listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePage {
    pub templates: Vec<TemplateWithTags>,
    /// Matching templates before paging.
    pub total: i64,
}

impl TemplatePage {
    fn empty() -> Self {
        Self {
            templates: Vec::new(),
            total: 0,
        }
    }
}

/// Templates use case.
pub struct TemplateInteractor {
    templates: Box<dyn TemplateRepository>,
    tags: Box<dyn TagRepository>,
    template_tags: Box<dyn TemplateTagRepository>,
}

impl TemplateInteractor {
    /// Create a new interactor over the given repositories.
    pub fn new(
        templates: Box<dyn TemplateRepository>,
        tags: Box<dyn TagRepository>,
        template_tags: Box<dyn TemplateTagRepository>,
    ) -> Self {
        Self {
            templates,
            tags,
            template_tags,
        }
    }

    /// List one page of templates.
    ///
    /// An empty `keyword` matches every template; otherwise only templates
    /// carrying a tag whose title contains it (ignoring case) are listed.
    #[instrument(skip(self))]
    pub fn list_templates(
        &self,
        limit: i64,
        offset: i64,
        keyword: &str,
    ) -> ZoooomResult<Outcome<TemplatePage>> {
        validator::validate_page_window(limit, offset)?;

        let filter = self.keyword_filter(keyword)?;
        if filter.template_ids.as_ref().is_some_and(Vec::is_empty) {
            debug!("No tag matches keyword");
            return Ok(Outcome::ok(TemplatePage::empty()));
        }

        let (templates, total) = self.templates.list(&filter, limit, offset)?;
        let templates = templates
            .into_iter()
            .map(|template| {
                let tags = self.tags_of(template.id)?;
                Ok((template, tags))
            })
            .collect::<ZoooomResult<Vec<_>>>()?;

        debug!(returned = templates.len(), total, "Templates listed");
        Ok(Outcome::ok(TemplatePage { templates, total }))
    }

    /// Fetch a template and its tags by external identifier.
    #[instrument(skip(self))]
    pub fn get_by_unique_id(&self, uid: &str) -> ZoooomResult<Outcome<TemplateWithTags>> {
        let uid = Uid::try_new(uid)?;

        let template = self
            .templates
            .find_by_uid(&uid)?
            .ok_or_else(|| ApplicationError::TemplateNotFound {
                uid: uid.to_string(),
            })?;
        let tags = self.tags_of(template.id)?;

        Ok(Outcome::ok((template, tags)))
    }

    /// Store a new template and attach its tags.
    ///
    /// Tag titles are trimmed and duplicates collapsed (first occurrence
    /// wins). Existing tags are reused by title. The returned tags follow
    /// the request order.
    #[instrument(skip_all, fields(design_pattern_id = template.design_pattern_id, tags = tags.len()))]
    pub fn add(&self, template: Template, tags: Vec<Tag>) -> ZoooomResult<Outcome<TemplateWithTags>> {
        validator::validate_template(&template)?;
        validator::validate_tags(&tags)?;

        // Tags first: a failure here must not leave an untagged template.
        let resolved = unique_titles(&tags)
            .iter()
            .map(|title| self.tags.find_or_create(title))
            .collect::<ZoooomResult<Vec<_>>>()?;

        let stored = self.templates.store(template)?;
        info!(id = stored.id, uid = %stored.uid, "Template stored");

        for tag in &resolved {
            self.template_tags.link(stored.id, tag.id)?;
        }

        debug!(linked = resolved.len(), "Tags linked");
        Ok(Outcome::created((stored, resolved)))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn keyword_filter(&self, keyword: &str) -> ZoooomResult<TemplateFilter> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(TemplateFilter::all());
        }

        let tag_ids: Vec<i64> = self.tags.search(keyword)?.iter().map(|t| t.id).collect();
        if tag_ids.is_empty() {
            return Ok(TemplateFilter::ids(Vec::new()));
        }

        Ok(TemplateFilter::ids(
            self.template_tags.template_ids_for(&tag_ids)?,
        ))
    }

    fn tags_of(&self, template_id: i64) -> ZoooomResult<Vec<Tag>> {
        let ids = self.template_tags.tag_ids_for(template_id)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let tags = self.tags.find_by_ids(&ids)?;
        if let Some(missing) = ids.iter().find(|id| !tags.iter().any(|t| t.id == **id)) {
            return Err(ApplicationError::TagNotFound { id: *missing }.into());
        }

        Ok(tags)
    }
}

fn unique_titles(tags: &[Tag]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let title = tag.normalized_title();
        if !titles.iter().any(|t| t == title) {
            titles.push(title.to_string());
        }
    }
    titles
}
