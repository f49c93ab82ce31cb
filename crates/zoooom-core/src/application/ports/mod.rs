//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `zoooom-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateRepository`: template records
//!   - `TagRepository`: tag records
//!   - `TemplateTagRepository`: the many-to-many association
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The HTTP controller in `zoooom-server` drives `TemplateInteractor` directly)

pub mod output;

pub use output::{TagRepository, TemplateFilter, TemplateRepository, TemplateTagRepository};

#[cfg(test)]
pub use output::{MockTagRepository, MockTemplateRepository, MockTemplateTagRepository};
