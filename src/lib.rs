//! Photo Date Sorter - file photos into folders by capture date
//!
//! This library moves the `.jpg` and `.heic` files found directly inside a
//! directory into a `YYYY/YYYY-MM/YYYY-MM-DD/` tree below it, using:
//! - EXIF `DateTimeOriginal` extraction for JPEG and HEIC containers
//! - A pluggable capture date decoder for tests and other sources
//! - Per-file skip-and-log handling, with directory and rename errors fatal

pub mod cli;
pub mod config;
pub mod error;
pub mod organize;
pub mod time;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use organize::{FileOutcome, Organizer, OutcomeStatus, RunStats, SkipReason, target_dir, target_path};
pub use time::{CaptureDateDecoder, ExifDecoder};
