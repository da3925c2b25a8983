use crate::importer_core::error::{ImporterError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found directly inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Base name exactly as on disk; may not be valid UTF-8.
    pub filename: OsString,
    /// Lower-cased, without the leading dot. Empty when the file has none.
    pub extension: String,
}

impl Candidate {
    pub fn new(path: PathBuf) -> Self {
        let filename = path.file_name().unwrap_or_default().to_os_string();

        let extension = path
            .extension()
            .unwrap_or_default()
            .to_string_lossy()
            .to_lowercase();

        Candidate {
            path,
            filename,
            extension,
        }
    }
}

/// List the regular files directly inside `source_dir`.
///
/// Subdirectories are not descended into, and symlinks, directories and
/// special files are left out. Entries are sorted by file name.
pub fn find_candidates(source_dir: &Path) -> Result<Vec<Candidate>> {
    if !source_dir.is_dir() {
        return Err(ImporterError::NotADirectory(source_dir.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            candidates.push(Candidate::new(entry.into_path()));
        } else {
            log::debug!("Ignoring non-regular entry {}", entry.path().display());
        }
    }

    Ok(candidates)
}
