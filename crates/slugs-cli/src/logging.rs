//! Logging initialization.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, OutputFormat};

/// Initialize the tracing subscriber based on CLI flags.
///
/// Logs go to stderr so stdout carries only the slug list. JSON output keeps
/// stderr down to errors unless `--verbose` was given.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || cli.format == OutputFormat::Json {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
