use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Move photos and videos into date-named folders based on their EXIF capture date"
)]
pub struct Cli {
    /// Don't actually move anything, only report what would happen
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Suppress per-file status lines
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Group destination folders by month (YYYY-MM) instead of day (YYYY-MM-DD)
    #[arg(short = 'm', long)]
    pub month: bool,

    /// Directory to move items from [default: current directory]
    #[arg(short = 's', long)]
    pub source: Option<PathBuf>,

    /// Directory to move photos to [default: home directory]
    #[arg(short = 'p', long)]
    pub photo_path: Option<PathBuf>,

    /// Directory to move videos to [default: home directory]
    #[arg(short = 'v', long)]
    pub video_path: Option<PathBuf>,

    /// Enable file logging to photo-importer.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}
