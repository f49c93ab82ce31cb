//! Wire shapes for the templates endpoints and the two mapping functions
//! between them and the core entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zoooom_core::domain::{Tag, Template};

/// `POST /templates` body.  Absent fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateRequest {
    pub design_pattern_id: i64,
    pub is_private: bool,
    pub background_url: String,
    pub generated_sample_url: String,
    pub tags: Vec<String>,
}

/// A template as the API renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub id: i64,
    pub uid: String,
    pub design_pattern_id: i64,
    pub is_private: bool,
    pub background_url: String,
    pub generated_sample_url: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// `GET /templates` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    pub templates: Vec<TemplateResponse>,
    pub pagination: Pagination,
}

/// Split a request into a draft template and draft tags, one per title.
pub fn request_converter(request: TemplateRequest) -> (Template, Vec<Tag>) {
    let template = Template::draft(
        request.design_pattern_id,
        request.is_private,
        request.background_url,
        request.generated_sample_url,
    );
    let tags = request.tags.into_iter().map(Tag::draft).collect();
    (template, tags)
}

pub fn response_builder(template: &Template, tags: &[Tag]) -> TemplateResponse {
    TemplateResponse {
        id: template.id,
        uid: template.uid.as_str().to_owned(),
        design_pattern_id: template.design_pattern_id,
        is_private: template.is_private,
        background_url: template.background_url.clone(),
        generated_sample_url: template.generated_sample_url.clone(),
        tags: tags.iter().map(|t| t.title.clone()).collect(),
        updated_at: template.updated_at,
        created_at: template.created_at,
    }
}
