//! Infrastructure adapters for Zoooom.
//!
//! This crate implements the ports defined in `zoooom-core::application::ports`.
//! It contains all storage concerns and file I/O.

pub mod database;
pub mod repository;
pub mod seed;

// Re-export commonly used adapters
pub use database::InMemoryDatabase;
pub use repository::{
    InMemoryTagRepository, InMemoryTemplateRepository, InMemoryTemplateTagRepository,
};
pub use seed::{SeedError, SeedLoader};

use zoooom_core::application::TemplateInteractor;

/// Wire a [`TemplateInteractor`] over the repositories of `db`.
pub fn template_interactor(db: &InMemoryDatabase) -> TemplateInteractor {
    TemplateInteractor::new(
        Box::new(db.template_repository()),
        Box::new(db.tag_repository()),
        Box::new(db.template_tag_repository()),
    )
}
