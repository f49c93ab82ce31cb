//! Application layer for Zoooom.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TemplateInteractor)
//! - **Ports**: Interface definitions (traits) for persistence
//! - **Outcome**: The status/value pair every use case returns
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod services;

pub use services::{TemplateInteractor, TemplatePage, TemplateWithTags};

pub use ports::{TagRepository, TemplateFilter, TemplateRepository, TemplateTagRepository};

pub use error::ApplicationError;
pub use outcome::{Outcome, Status};
