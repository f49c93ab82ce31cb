use serde::{Deserialize, Serialize};

/// Join record between a template and a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateTag {
    pub template_id: i64,
    pub tag_id: i64,
}

impl TemplateTag {
    pub const fn new(template_id: i64, tag_id: i64) -> Self {
        Self {
            template_id,
            tag_id,
        }
    }
}
