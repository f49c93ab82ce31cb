use crate::domain::{
    entities::{Tag, Template},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_tags(tags: &[Tag]) -> Result<(), DomainError> {
        tags.iter().try_for_each(Tag::validate)
    }

    /// `limit` must be positive; `offset` is derived from it and a page number,
    /// so a negative offset means the page was below 1.
    pub fn validate_page_window(limit: i64, offset: i64) -> Result<(), DomainError> {
        if limit < 1 {
            return Err(DomainError::InvalidPagination {
                field: "limit",
                value: limit,
            });
        }
        if offset < 0 {
            return Err(DomainError::InvalidPagination {
                field: "offset",
                value: offset,
            });
        }
        Ok(())
    }
}
