use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rochade_cli::Session;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the text protocol.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("rochade starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new()
        .run(stdin.lock(), &mut stdout)
        .context("text session failed")?;
    Ok(())
}
