//! Arcade Contacts - main entry point.

use anyhow::Result;
use arcade_contacts::cli::CliArgs;
use arcade_contacts::{cli, CodeTable, Config, ContactBook, JsonContactRepository};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, so output stays on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(db_path = %config.db_path.display(), "configuration loaded");

    // Open the collection and the book; the storage handle lives inside
    // the book and is released when it drops at the end of main.
    let repository = JsonContactRepository::open(&config.db_path).map_err(|e| {
        error!("Failed to open contact collection: {e}");
        e
    })?;
    let mut book = ContactBook::open(Box::new(repository), CodeTable::default())?;

    cli::run(args, &mut book)?;
    Ok(())
}
