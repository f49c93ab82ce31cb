//! `zoooom config` — print the effective configuration.

use std::io::Write;

use crate::{
    config::AppConfig,
    error::{ServerError, ServerResult},
};

pub fn execute(config: &AppConfig) -> ServerResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(config)?)?;
    Ok(())
}

fn render(config: &AppConfig) -> ServerResult<String> {
    serde_json::to_string_pretty(config).map_err(|e| ServerError::Config {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}
