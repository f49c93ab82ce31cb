//! Zoooom Core - Layered Architecture Implementation
//!
//! This crate provides the domain and application layers for the Zoooom
//! template gallery backend, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         zoooom-server (HTTP)            │
//! │   (TemplateController, DTO mapping)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (TemplateInteractor)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Template, Tag, TemplateTag repos)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    zoooom-adapters (Infrastructure)     │
//! │           (InMemoryDatabase)            │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │      (Template, Tag, TemplateTag)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zoooom_core::{
//!     application::TemplateInteractor,
//!     domain::{Tag, Template},
//! };
//!
//! // Repositories come from an adapter crate.
//! let interactor = TemplateInteractor::new(templates, tags, template_tags);
//! let outcome = interactor
//!     .add(Template::draft(5, false, "bg.png", "sample.png"), vec![Tag::draft("retro")])
//!     .unwrap();
//! println!("{} -> {}", outcome.status, outcome.value.0.uid);
//! ```

pub mod domain;

pub mod application;

pub mod error;
