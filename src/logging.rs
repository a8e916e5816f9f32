//! Subscriber setup.
//!
//! Loggers filter records by their own effective level before anything reaches
//! `tracing`, so the subscriber installed here lets every level through unless
//! `RUST_LOG` filtering is requested explicitly.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{Error, Result};

/// How emitted records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberOptions {
    /// Write to stdout instead of stderr.
    pub to_stdout: bool,
    /// Additionally filter through `RUST_LOG`.
    pub use_env_filter: bool,
}

impl Default for SubscriberOptions {
    fn default() -> Self {
        Self {
            to_stdout: true,
            use_env_filter: false,
        }
    }
}

impl SubscriberOptions {
    fn filter(&self) -> EnvFilter {
        let everything = || EnvFilter::default().add_directive(LevelFilter::TRACE.into());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| everything())
        } else {
            everything()
        }
    }
}

/// Install a global fmt subscriber. Fails if one is already installed.
pub fn configure_logging(options: SubscriberOptions) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(options.filter());
    let installed = if options.to_stdout {
        builder.with_writer(std::io::stdout).try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
    installed.map_err(|e| Error::Subscriber(e.to_string()))
}
