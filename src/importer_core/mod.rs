pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod exif;
pub mod import;
pub mod media;
pub mod mover;

pub use candidate::{Candidate, find_candidates};
pub use cli::Cli;
pub use config::ImportConfig;
pub use error::{ImporterError, SkipReason};
pub use exif::{CaptureDate, CaptureDateSource, DateGrouping, ExifToolSource};
pub use import::{FileOutcome, ImportSummary, Importer};
pub use media::MediaType;
