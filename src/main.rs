use anyhow::{Context, Result};
use clap::Parser;
use photo_importer::importer_core::{Cli, ExifToolSource, ImportConfig, Importer, ImporterError};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

const LOG_FILE_NAME: &str = "photo-importer.log";

/// Warnings and errors go to the terminal; `--log` adds a file log at
/// `--log-level`.
fn init_logging(cli: &Cli) -> Result<()> {
    let terminal = TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![terminal];

    if cli.log {
        let file = File::create(LOG_FILE_NAME)
            .with_context(|| format!("could not create {}", LOG_FILE_NAME))?;
        loggers.push(WriteLogger::new(cli.log_level, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = ImportConfig::from_cli(&cli)?;
    config.validate()?;

    let (quiet, dry_run) = (config.quiet, config.dry_run);
    let summary = Importer::new(config, ExifToolSource::new()).run()?;

    if !quiet {
        let label = if dry_run { "[DRY RUN]" } else { "Import complete:" };
        println!("\n{} {}", label, summary);
    }

    if summary.failed > 0 {
        return Err(ImporterError::MoveFailed(summary.failed).into());
    }

    Ok(())
}
