use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImporterError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to move {0} file(s)")]
    MoveFailed(usize),

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Configuration errors
    #[error("Could not determine the home directory; pass --photo-path and --video-path")]
    HomeDirUnavailable,

    // Metadata errors
    #[error("Exiftool error: {0}")]
    Exiftool(String),

    #[error("Date parsing error: {0}")]
    InvalidDateFormat(String),
}

/// Why a single file was left where it is.
///
/// None of these abort the run; the importer reports the reason and moves on
/// to the next file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry vanished or stopped being a regular file after enumeration.
    NotAFile,
    Unreadable(String),
    NoCaptureDate(String),
    UnsupportedType(String),
    AlreadyInPlace,
    DestinationExists(PathBuf),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAFile => write!(f, "is not a file"),
            SkipReason::Unreadable(reason) => write!(f, "is not readable ({})", reason),
            SkipReason::NoCaptureDate(reason) => {
                write!(f, "has no capture date ({})", reason)
            }
            SkipReason::UnsupportedType(ext) if ext.is_empty() => {
                write!(f, "is not a supported file type (no extension)")
            }
            SkipReason::UnsupportedType(ext) => {
                write!(f, "is not a supported file type (.{})", ext)
            }
            SkipReason::AlreadyInPlace => write!(f, "does not need to be moved"),
            SkipReason::DestinationExists(dest) => {
                write!(f, "already exists in the destination ({})", dest.display())
            }
        }
    }
}

/// Result type for importer operations.
pub type Result<T> = std::result::Result<T, ImporterError>;
