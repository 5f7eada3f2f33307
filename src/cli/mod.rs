//! CLI command definitions, argument parsing, and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use taskscout::constants::ENV_LOG;

/// Default log filter for the given verbosity flags.
pub fn default_log_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber.
///
/// `TASKSCOUT_LOG` takes precedence over the verbosity flags. Logs go to
/// stderr so rendered reports on stdout stay machine-readable.
pub fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
