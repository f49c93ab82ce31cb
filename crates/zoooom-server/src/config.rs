//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! server binary owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `ZOOOOM__SECTION__KEY`
//! 3. Config file (`--config`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    cli::LogFormat,
    error::{ServerError, ServerResult},
};

const ENV_PREFIX: &str = "ZOOOOM";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Fallbacks for the listing query string.
    pub pagination: PaginationConfig,
    /// Log output settings.
    pub log: LogConfig,
    /// Storage bootstrap.
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page: i64,
    pub default_limit: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_limit: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file of templates to load before serving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// path must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> ServerResult<Self> {
        let defaults = config::Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = config::Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(ServerError::Config {
                        message: format!("config file not found: {}", path.display()),
                        source: None,
                    });
                }
                builder.add_source(toml_file(path).required(true))
            }
            None => builder.add_source(toml_file(&Self::config_path()).required(false)),
        };

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.zoooom.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "zoooom", "zoooom")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".zoooom.toml"))
    }
}

fn toml_file(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path).format(config::FileFormat::Toml)
}

fn config_error(err: config::ConfigError) -> ServerError {
    ServerError::Config {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert_eq!(cfg.pagination.default_page, 1);
        assert_eq!(cfg.pagination.default_limit, 10);
        assert_eq!(cfg.log.format, LogFormat::Pretty);
        assert!(cfg.storage.seed_file.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:9000\"\n\n[pagination]\ndefault_limit = 25\n\n[log]\nformat = \"json\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:9000");
        assert_eq!(cfg.pagination.default_limit, 25);
        assert_eq!(cfg.pagination.default_page, 1);
        assert_eq!(cfg.log.format, LogFormat::Json);
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ServerError::Config { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server\nbind = ").unwrap();

        let err = AppConfig::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ServerError::Config { .. }));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
