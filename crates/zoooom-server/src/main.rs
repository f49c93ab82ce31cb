//! # Zoooom server
//!
//! HTTP service for the template gallery.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults + file + env).
//! 3. Initialise the tracing subscriber, which needs `log.format`.
//! 4. Dispatch to the appropriate command handler.
//! 5. Translate any [`ServerError`] into a message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | Usage error             |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{ServerError, ServerResult},
    logging::init_logging,
};

mod cli;
mod commands;
mod config;
mod controllers;
mod error;
mod logging;
mod routes;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // `exit` prints help/version with status 0 and usage errors with 2.
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());
    let verbose = cli.global.verbose > 0;

    // ── 2. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprint!("{}", e.format_plain(verbose));
            return ExitCode::from(e.exit_code());
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global, &config.log) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        config = ?cli.global.config,
        "Zoooom started"
    );

    // ── 4. Dispatch + 5. Error handling ──────────────────────────────────
    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig) -> ServerResult<()> {
    match cli.command {
        Commands::Serve(args) => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(commands::serve::execute(args, config))?;
            info!("Zoooom exited cleanly");
            Ok(())
        }
        Commands::Config => commands::config::execute(&config),
    }
}

/// Log the error, print it to stderr, and pick the exit code.
fn handle_error(err: ServerError, verbose: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.format_plain(verbose));
    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
