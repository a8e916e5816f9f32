//! Command-line front end for the logging configuration helpers.
//!
//! Installs a subscriber, applies the requested root / application / per-logger
//! levels, then writes one line per level through each configured logger so the
//! resulting filtering can be inspected.
//!
//! High‑level flow:
//! 1. Parse CLI (`-v`/`-q` pick the root level, `--app-root` names the application).
//! 2. Install the fmt subscriber on stdout (or stderr with `--stderr`).
//! 3. Apply `--level` to the application logger and to every `--logger` name.
//! 4. Emit a sample record at each named level on every configured logger.

mod cli;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::info;

use cli::{parse_level_arg, verbosity_to_root_level};
use pi_log::{Level, Logger, SubscriberOptions};

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(
    version,
    about = concat!(
        env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"),
        " - Configure named loggers and show which records pass their levels.",
    )
)]
struct Cli {
    /// Application root logger name (derived from the call site when omitted).
    #[arg(long = "app-root", alias = "app")]
    app_root: Option<String>,
    /// Level for the application logger and every `--logger` (name or number).
    #[arg(long = "level", short = 'l')]
    level: Option<String>,
    /// Additional logger names to configure; may be repeated.
    #[arg(long = "logger")]
    loggers: Vec<String>,
    /// Write records to stderr instead of stdout.
    #[arg(long = "stderr")]
    stderr: bool,
    /// Honour RUST_LOG filtering on top of logger levels.
    #[arg(long = "env-filter")]
    env_filter: bool,
    /// Increase verbosity (-v=debug, -vv=everything) of the root logger.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Quiet mode: only warnings and errors. Overrides -v.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Program entry point.
///
/// Invalid level names surface as a non‑zero exit code via anyhow.
fn main() -> Result<()> {
    let cli = Cli::parse();
    pi_log::configure_logging(SubscriberOptions {
        to_stdout: !cli.stderr,
        use_env_filter: cli.env_filter,
    })?;

    pi_log::set_root_level(verbosity_to_root_level(cli.quiet, cli.verbose))?;
    if let Some(name) = &cli.app_root {
        pi_log::set_application_root(name);
    }
    let level = cli.level.as_deref().map(parse_level_arg);

    let app = pi_log::application_logger!(level.clone())?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        app = app.name(),
        effective = %pi_log::level_name(app.effective_level()),
        "starting pi-log"
    );

    let mut configured = vec![app];
    for name in &cli.loggers {
        configured.push(pi_log::get_logger(Some(name.as_str()), level.clone())?);
    }
    for logger in &configured {
        emit_samples(logger);
    }
    Ok(())
}

fn emit_samples(logger: &Logger) {
    for level in Level::ALL.into_iter().skip(1) {
        logger.log(
            level.severity(),
            format_args!("sample {level} record from {}", logger.name()),
        );
    }
}
