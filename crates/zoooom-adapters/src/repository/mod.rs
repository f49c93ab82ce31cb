//! In-memory implementations of the repository ports.

mod tag;
mod template;
mod template_tag;

pub use tag::InMemoryTagRepository;
pub use template::InMemoryTemplateRepository;
pub use template_tag::InMemoryTemplateTagRepository;
