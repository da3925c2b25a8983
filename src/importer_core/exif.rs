use crate::importer_core::error::{ImporterError, Result};
use exiftool::ExifTool;
use serde::Deserialize;
use std::path::Path;
use time::Date;
use time::format_description::BorrowedFormatItem;

/// Date portion of an EXIF timestamp (`2023:06:15 10:20:30`).
const EXIF_DATE_FORMAT: &[BorrowedFormatItem] =
    time::macros::format_description!("[year]:[month]:[day]");

/// The only tag the importer reads.
const CAPTURE_DATE_TAG: &str = "-DateTimeOriginal";

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct RawCaptureInfo {
    #[serde(default)]
    date_time_original: Option<String>,
}

/// How destination directories are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateGrouping {
    /// `YYYY-MM-DD`
    #[default]
    Day,
    /// `YYYY-MM`
    Month,
}

/// The day a photo or video was originally recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureDate(Date);

impl CaptureDate {
    pub fn new(date: Date) -> Self {
        CaptureDate(date)
    }

    /// Name of the date directory this capture date files under.
    pub fn dir_name(&self, grouping: DateGrouping) -> String {
        let month = u8::from(self.0.month());
        match grouping {
            DateGrouping::Day => format!("{:04}-{:02}-{:02}", self.0.year(), month, self.0.day()),
            DateGrouping::Month => format!("{:04}-{:02}", self.0.year(), month),
        }
    }
}

impl std::fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name(DateGrouping::Day))
    }
}

/// Parse an EXIF `DateTimeOriginal` value. Only the date part is kept; the time
/// of day and any trailing offset or sub-seconds are ignored.
pub fn parse_capture_date(value: &str) -> Result<CaptureDate> {
    let date_part = value.split_whitespace().next().unwrap_or_default();
    if date_part.is_empty() {
        return Err(ImporterError::InvalidDateFormat("empty date".to_string()));
    }

    Date::parse(date_part, EXIF_DATE_FORMAT)
        .map(CaptureDate)
        .map_err(|e| ImporterError::InvalidDateFormat(format!("'{}': {}", value, e)))
}

/// Anything that can tell the importer when a file was captured.
///
/// `Ok(None)` means the file carries no capture-date tag. `Err` covers both a
/// tag that does not parse and a failure of the extractor itself.
pub trait CaptureDateSource {
    fn capture_date(&mut self, path: &Path) -> Result<Option<CaptureDate>>;
}

/// Capture dates read through a long-running `exiftool` process.
///
/// The process is started on first use, so runs that never reach metadata
/// extraction never spawn it.
#[derive(Default)]
pub struct ExifToolSource {
    exiftool: Option<std::result::Result<ExifTool, String>>,
}

impl ExifToolSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn exiftool(&mut self) -> Result<&mut ExifTool> {
        let state = self.exiftool.get_or_insert_with(|| {
            ExifTool::new().map_err(|e| {
                log::warn!("ExifTool not available, no capture dates can be read: {}", e);
                e.to_string()
            })
        });

        state
            .as_mut()
            .map_err(|reason| ImporterError::Exiftool(reason.clone()))
    }
}

impl CaptureDateSource for ExifToolSource {
    fn capture_date(&mut self, path: &Path) -> Result<Option<CaptureDate>> {
        let exiftool = self.exiftool()?;
        let raw: RawCaptureInfo = exiftool
            .read_metadata(path, &[CAPTURE_DATE_TAG])
            .map_err(|e| ImporterError::Exiftool(e.to_string()))?;

        log::debug!("{}: DateTimeOriginal = {:?}", path.display(), raw.date_time_original);
        capture_date_from_tag(raw.date_time_original.as_deref())
    }
}

/// A missing or blank tag means "no date"; anything else must parse.
fn capture_date_from_tag(value: Option<&str>) -> Result<Option<CaptureDate>> {
    match value {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_capture_date(value).map(Some),
    }
}
