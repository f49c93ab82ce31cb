//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, LogFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "zoooom",
    bin_name = "zoooom",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Template gallery HTTP service",
    long_about = "Zoooom serves the templates API: paginated listing, \
                  lookup by uid, and creation with tags.",
    after_help = "EXAMPLES:\n\
        \x20 zoooom serve\n\
        \x20 zoooom serve --bind 0.0.0.0:3000 -v\n\
        \x20 zoooom --config ./zoooom.toml config",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    #[command(
        visible_alias = "s",
        about = "Run the HTTP server",
        after_help = "EXAMPLES:\n\
            \x20 zoooom serve\n\
            \x20 zoooom serve --bind 127.0.0.1:9000\n\
            \x20 zoooom serve --seed ./fixtures/templates.json"
    )]
    Serve(ServeArgs),

    /// Print the effective configuration.
    #[command(about = "Print the effective configuration as JSON")]
    Config,
}

// ── serve ─────────────────────────────────────────────────────────────────────

/// Arguments for `zoooom serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides `server.bind`.
    #[arg(short = 'b', long = "bind", value_name = "ADDR")]
    pub bind: Option<String>,

    /// JSON seed file loaded before serving; overrides `storage.seed_file`.
    #[arg(long = "seed", value_name = "FILE")]
    pub seed: Option<std::path::PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_accepts_bind_override() {
        let cli = Cli::try_parse_from(["zoooom", "serve", "--bind", "0.0.0.0:3000"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.bind.as_deref(), Some("0.0.0.0:3000")),
            Commands::Config => panic!("expected serve"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["zoooom", "config", "-vv", "--log-format", "json"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["zoooom", "-q", "-v", "config"]).is_err());
    }
}
