//! JSON seed file loader.
//!
//! Reads an array of template descriptions and hands them back as drafts so
//! the caller can push them through the interactor, which keeps tag reuse
//! and validation in one place.
//!
//! # Format
//!
//! ```json
//! [
//!   {
//!     "design_pattern_id": 3,
//!     "is_private": false,
//!     "background_url": "https://cdn.example.com/bg/3.png",
//!     "generated_sample_url": "https://cdn.example.com/sample/3.png",
//!     "tags": ["retro", "neon"]
//!   }
//! ]
//! ```
//!
//! Every field except `design_pattern_id` may be omitted.

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use zoooom_core::domain::{Tag, Template};

/// Failure reading or parsing a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct SeedEntry {
    design_pattern_id: i64,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    background_url: String,
    #[serde(default)]
    generated_sample_url: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl SeedEntry {
    fn into_drafts(self) -> (Template, Vec<Tag>) {
        let template = Template::draft(
            self.design_pattern_id,
            self.is_private,
            self.background_url,
            self.generated_sample_url,
        );
        let tags = self.tags.into_iter().map(Tag::draft).collect();
        (template, tags)
    }
}

/// Loads template drafts from a JSON seed file.
#[derive(Debug, Clone)]
pub struct SeedLoader {
    path: PathBuf,
}

impl SeedLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the file into `(template, tags)` drafts, in file order.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<(Template, Vec<Tag>)>, SeedError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SeedError::Read {
            path: self.path.clone(),
            source,
        })?;

        let entries = parse(&raw).map_err(|source| SeedError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(entries = entries.len(), "Seed file parsed");
        Ok(entries.into_iter().map(SeedEntry::into_drafts).collect())
    }
}

fn parse(raw: &str) -> Result<Vec<SeedEntry>, serde_json::Error> {
    serde_json::from_str(raw)
}
