//! Tracing subscriber initialisation.
//!
//! Only the server binary is allowed to call [`init_logging`]; `zoooom-core`
//! and `zoooom-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | INFO         |
//! | `-v`     | DEBUG        |
//! | `-vv`    | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{GlobalArgs, LogFormat},
    config::LogConfig,
};

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.  The
/// `--log-format` flag wins over `log.format` from the configuration.
pub fn init_logging(args: &GlobalArgs, config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(derive_level(args))));

    let registry = tracing_subscriber::registry().with(filter);

    match args.log_format.unwrap_or(config.format) {
        LogFormat::Pretty => {
            let use_ansi = !args.no_color && std::io::stderr().is_terminal();
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(use_ansi)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        }
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Filter string giving every workspace crate, and request tracing, `level`.
fn default_directives(level: &str) -> String {
    format!("zoooom={level},zoooom_core={level},zoooom_adapters={level},tower_http={level}")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            log_format: None,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false)), "info");
    }

    #[test]
    fn level_verbose_one() {
        assert_eq!(derive_level(&args_with(1, false)), "debug");
    }

    #[test]
    fn level_verbose_two_plus() {
        assert_eq!(derive_level(&args_with(2, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = default_directives("debug");
        for target in ["zoooom=", "zoooom_core=", "zoooom_adapters=", "tower_http="] {
            assert!(directives.contains(target), "missing {target}");
        }
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
