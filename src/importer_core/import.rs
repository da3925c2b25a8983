use crate::importer_core::candidate::{Candidate, find_candidates};
use crate::importer_core::config::ImportConfig;
use crate::importer_core::error::{Result, SkipReason};
use crate::importer_core::exif::CaptureDateSource;
use crate::importer_core::media::MediaType;
use crate::importer_core::mover::{self, MoveMethod};
use std::fs;
use std::path::{Path, PathBuf};

/// Scans a source directory and files photos and videos by capture date.
pub struct Importer<S: CaptureDateSource> {
    config: ImportConfig,
    dates: S,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Moved {
        destination: PathBuf,
        media_type: MediaType,
        method: MoveMethod,
    },
    WouldMove {
        destination: PathBuf,
        media_type: MediaType,
    },
    Skipped(SkipReason),
    /// Passed every check but creating the date directory or moving failed.
    Failed { destination: PathBuf, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// A file that passed every check.
#[derive(Debug)]
struct Plan {
    media_type: MediaType,
    destination: PathBuf,
}

/// Results of an import run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub reports: Vec<FileReport>,
    pub photos: usize,
    pub videos: usize,
    pub skipped: usize,
    pub failed: usize,
    pub dry_run: bool,
}

impl ImportSummary {
    fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        match &outcome {
            FileOutcome::Moved { media_type, .. } | FileOutcome::WouldMove { media_type, .. } => {
                match media_type {
                    MediaType::Photo => self.photos += 1,
                    MediaType::Video => self.videos += 1,
                }
            }
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.reports.push(FileReport { path, outcome });
    }

    /// Outcome recorded for `path`, if it was seen.
    pub fn outcome_for(&self, path: &Path) -> Option<&FileOutcome> {
        self.reports
            .iter()
            .find(|r| r.path == path)
            .map(|r| &r.outcome)
    }
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.dry_run { "would be moved" } else { "moved" };
        write!(
            f,
            "{} photos, {} videos {} ({} skipped",
            self.photos, self.videos, verb, self.skipped
        )?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        write!(f, ")")
    }
}

impl<S: CaptureDateSource> Importer<S> {
    pub fn new(config: ImportConfig, dates: S) -> Self {
        Importer { config, dates }
    }

    /// Import every file directly inside the configured source directory.
    ///
    /// Per-file problems never stop the run: they are reported as skips or, for
    /// errors while creating directories or moving, as [`FileOutcome::Failed`].
    /// Only failing to list the source is fatal.
    pub fn run(&mut self) -> Result<ImportSummary> {
        log::info!("Scanning source directory {}", self.config.source.display());

        let candidates = find_candidates(&self.config.source)?;
        for candidate in &candidates {
            self.status(format!("{}", candidate.path.display()));
        }

        log::info!("Found {} files to process", candidates.len());

        let mut summary = ImportSummary {
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        for candidate in candidates {
            let outcome = match self.plan(&candidate) {
                Ok(plan) => self.execute(&candidate, plan),
                Err(reason) => {
                    self.status(format!("{} {}, skipping", candidate.path.display(), reason));
                    FileOutcome::Skipped(reason)
                }
            };
            summary.record(candidate.path, outcome);
        }

        log::info!("Import finished: {}", summary);
        Ok(summary)
    }

    /// Run the checks for one file, in order. The first one that fails decides
    /// the skip reason; nothing on disk is touched here.
    fn plan(&mut self, candidate: &Candidate) -> std::result::Result<Plan, SkipReason> {
        let path = &candidate.path;

        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_file() => {}
            _ => return Err(SkipReason::NotAFile),
        }

        readable(path)?;

        let media_type = MediaType::from_extension(&candidate.extension)
            .ok_or_else(|| SkipReason::UnsupportedType(candidate.extension.clone()))?;

        let capture_date = match self.dates.capture_date(path) {
            Ok(Some(date)) => date,
            Ok(None) => {
                return Err(SkipReason::NoCaptureDate(
                    "no DateTimeOriginal tag".to_string(),
                ));
            }
            Err(e) => {
                log::warn!("Could not read capture date from {}: {}", path.display(), e);
                return Err(SkipReason::NoCaptureDate(e.to_string()));
            }
        };

        let destination = self
            .config
            .root_for(media_type)
            .join(capture_date.dir_name(self.config.grouping))
            .join(&candidate.filename);

        if mover::same_location(path, &destination) {
            return Err(SkipReason::AlreadyInPlace);
        }

        if mover::is_occupied(&destination) {
            return Err(SkipReason::DestinationExists(destination));
        }

        log::debug!(
            "{} is a {} captured {}, destination {}",
            path.display(),
            media_type,
            capture_date,
            destination.display()
        );

        Ok(Plan {
            media_type,
            destination,
        })
    }

    fn execute(&self, candidate: &Candidate, plan: Plan) -> FileOutcome {
        let Plan {
            media_type,
            destination,
        } = plan;

        if self.config.dry_run {
            self.status(format!(
                "not moving {} to {} because of --dry-run",
                candidate.path.display(),
                destination.display()
            ));
            return FileOutcome::WouldMove {
                destination,
                media_type,
            };
        }

        let result = destination
            .parent()
            .map_or(Ok(()), mover::provision_dir)
            .and_then(|()| {
                self.status(format!(
                    "moving {} to {}",
                    candidate.path.display(),
                    destination.display()
                ));
                mover::move_file(&candidate.path, &destination)
            });

        match result {
            Ok(method) => FileOutcome::Moved {
                destination,
                media_type,
                method,
            },
            Err(e) => {
                log::error!(
                    "Failed to move {} to {}: {}",
                    candidate.path.display(),
                    destination.display(),
                    e
                );
                FileOutcome::Failed {
                    destination,
                    error: e.to_string(),
                }
            }
        }
    }

    /// Per-file status line, unless quiet.
    fn status(&self, line: String) {
        log::info!("{}", line);
        if !self.config.quiet {
            println!("{}", line);
        }
    }
}

/// Opening the file is the permission check.
fn readable(path: &Path) -> std::result::Result<(), SkipReason> {
    fs::File::open(path)
        .map(drop)
        .map_err(|e| SkipReason::Unreadable(e.to_string()))
}
