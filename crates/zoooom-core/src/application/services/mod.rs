//! Application services - orchestrate use cases.

pub mod template_interactor;

pub use template_interactor::{TemplateInteractor, TemplatePage, TemplateWithTags};
