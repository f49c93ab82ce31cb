pub mod tag;
pub mod template;
pub mod template_tag;

pub use crate::domain::DomainError;
pub use tag::Tag;
pub use template::Template;
pub use template_tag::TemplateTag;
