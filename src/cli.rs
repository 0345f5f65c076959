//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Photo Date Sorter - move photos into folders by capture date
///
/// Reads the EXIF capture date of every .jpg and .heic file directly inside
/// the target directory and moves it to YYYY/YYYY-MM/YYYY-MM-DD/ below that
/// directory. Subdirectories are left alone.
#[derive(Parser, Debug)]
#[command(name = "photo-date-sorter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the directory containing image files
    // String rather than PathBuf: clap's path parser rejects "" before we
    // can report it ourselves.
    #[arg(long, default_value = ".")]
    pub dir: String,
}

impl Cli {
    /// Whether `--dir` was given an empty value
    pub fn dir_is_empty(&self) -> bool {
        self.dir.is_empty()
    }

    /// Convert CLI arguments to Config
    pub fn to_config(&self) -> Config {
        Config::new(PathBuf::from(&self.dir))
    }
}
