//! slugs CLI - list every page slug of a content API
//!
//! Builds the fetch configuration once at startup, collects the slugs and
//! prints them. Any failure exits non-zero without printing a partial list.

use anyhow::{Context, Result};
use clap::Parser;
use slugs_core::fetch_all_slugs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

mod cli;
mod logging;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = load_dotenv()?;

    let cli = Cli::parse();
    logging::initialize_logging(&cli)?;

    if let Some(path) = dotenv {
        debug!(path = %path.display(), "Loaded environment file");
    }

    let config = cli.fetch_config()?;
    debug!(?config, "Resolved fetch configuration");

    let slugs = fetch_all_slugs(&config)
        .await
        .context("Failed to fetch page slugs")?;

    let stdout = io::stdout();
    output::write_slugs(&mut stdout.lock(), &slugs, cli.format)
}

/// Load `.env` from the working directory or a parent.
///
/// Values already in the environment win over the file. A missing file is
/// fine, an unreadable or malformed one is not.
fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).context("Failed to load environment file"),
    }
}
