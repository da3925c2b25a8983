use crate::importer_core::cli::Cli;
use crate::importer_core::error::{ImporterError, Result};
use crate::importer_core::exif::DateGrouping;
use crate::importer_core::media::MediaType;
use std::path::{Path, PathBuf};

/// Fully resolved settings for one import run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub source: PathBuf,
    pub photo_root: PathBuf,
    pub video_root: PathBuf,
    pub dry_run: bool,
    pub quiet: bool,
    pub grouping: DateGrouping,
}

impl ImportConfig {
    /// Build a config from parsed arguments, filling in defaults: the current
    /// directory for the source and the home directory for both roots.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source = match &cli.source {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let photo_root = match &cli.photo_path {
            Some(dir) => dir.clone(),
            None => home_dir()?,
        };

        let video_root = match &cli.video_path {
            Some(dir) => dir.clone(),
            None => home_dir()?,
        };

        let grouping = if cli.month {
            DateGrouping::Month
        } else {
            DateGrouping::Day
        };

        Ok(ImportConfig {
            source,
            photo_root,
            video_root,
            dry_run: cli.dry_run,
            quiet: cli.quiet,
            grouping,
        })
    }

    /// The source must be an existing directory. Destination roots are created
    /// on demand and need not exist yet.
    pub fn validate(&self) -> Result<()> {
        if !self.source.is_dir() {
            return Err(ImporterError::NotADirectory(self.source.clone()));
        }
        Ok(())
    }

    /// Destination root for a media type.
    pub fn root_for(&self, media_type: MediaType) -> &Path {
        match media_type {
            MediaType::Photo => &self.photo_root,
            MediaType::Video => &self.video_root,
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(ImporterError::HomeDirUnavailable)
}
