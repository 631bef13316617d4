use chrono::Local;
use clap::Parser;
use engine::Store;

use crate::{cli::Cli, error::Result};

mod cli;
mod commands;
mod error;
mod settings;
mod table;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings::Loaded {
        settings,
        skipped_file,
    } = settings::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spendlog={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = skipped_file {
        tracing::warn!("ignoring unreadable settings file: {err}");
    }

    let store = Store::new(&settings.file);
    tracing::debug!("using store {}", store.path().display());

    let mut stdout = std::io::stdout().lock();
    commands::dispatch(cli.command, &store, Local::now().naive_local(), &mut stdout)
}
