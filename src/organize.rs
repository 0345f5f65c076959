//! Sorting images into capture date folders
//!
//! Handles the core logic of:
//! - Listing the direct children of the root directory
//! - Reading each supported file's capture date
//! - Moving the file to `YYYY/YYYY-MM/YYYY-MM-DD/` below the root

use crate::config::Config;
use crate::error::{Error, Result};
use crate::time::CaptureDateDecoder;
use chrono::{Datelike, NaiveDateTime};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info, span, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Result of handling a single directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Original path of the entry
    pub source: PathBuf,
    /// Where the file was moved to
    pub destination: Option<PathBuf>,
    /// Capture date read from the file, if any
    pub capture_date: Option<NaiveDateTime>,
    pub status: OutcomeStatus,
}

/// What happened to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// File was moved into its date folder
    Moved,
    /// Entry was left in place
    Skipped(SkipReason),
}

/// Why an entry was left in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Subdirectories are never entered
    Directory,
    /// Extension is not one of the supported image types
    Unsupported,
    /// The file could not be opened or its metadata could not be decoded
    DecodeFailed(String),
    /// Metadata was readable but had no capture date
    DateMissing,
}

/// Counters for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub scanned: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        format!(
            "Scanned: {}, Moved: {}, Skipped: {}, Failed: {}",
            self.scanned, self.moved, self.skipped, self.failed
        )
    }
}

/// Target directory for a capture date: `root/YYYY/YYYY-MM/YYYY-MM-DD`
pub fn target_dir(root: &Path, date: &NaiveDateTime) -> PathBuf {
    let (year, month, day) = (date.year(), date.month(), date.day());
    root.join(format!("{}", year))
        .join(format!("{}-{:02}", year, month))
        .join(format!("{}-{:02}-{:02}", year, month, day))
}

/// Full destination path for a file name under its capture date folder
pub fn target_path(root: &Path, date: &NaiveDateTime, file_name: &OsStr) -> PathBuf {
    target_dir(root, date).join(file_name)
}

/// Moves the images directly inside a directory into capture date folders
pub struct Organizer<D> {
    config: Config,
    decoder: D,
    stats: RunStats,
}

impl<D: CaptureDateDecoder> Organizer<D> {
    /// Create an organizer reading capture dates with `decoder`
    pub fn new(config: Config, decoder: D) -> Self {
        Self {
            config,
            decoder,
            stats: RunStats::new(),
        }
    }

    /// Counters from the most recent run
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Process every direct child of the root directory once.
    ///
    /// Problems with an individual file are logged and that file is skipped.
    /// An unreadable root, a failed directory creation or a failed rename
    /// stops the run and is returned as the error.
    pub fn run(&mut self) -> Result<Vec<FileOutcome>> {
        let _span = span!(Level::INFO, "organize", root = %self.config.root_dir.display()).entered();

        self.stats = RunStats::new();

        // The full listing is read before anything moves, so an unreadable
        // root never leaves a half-sorted directory.
        let entries = self.list_entries()?;
        debug!(count = entries.len(), "Listed directory entries");

        let mut outcomes = Vec::with_capacity(entries.len());
        for entry in &entries {
            self.stats.scanned += 1;
            outcomes.push(self.process_entry(entry)?);
        }

        info!("{}", self.stats.summary());

        Ok(outcomes)
    }

    /// Direct children of the root, sorted by file name
    fn list_entries(&self) -> Result<Vec<DirEntry>> {
        let root = &self.config.root_dir;
        let access_error = |source: io::Error| Error::DirectoryAccess {
            path: root.clone(),
            source,
        };

        let metadata = fs::metadata(root).map_err(access_error)?;
        if !metadata.is_dir() {
            return Err(access_error(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )));
        }

        WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<std::result::Result<Vec<_>, walkdir::Error>>()
            .map_err(|e| access_error(e.into()))
    }

    fn process_entry(&mut self, entry: &DirEntry) -> Result<FileOutcome> {
        let path = entry.path();

        if entry.file_type().is_dir() {
            trace!(?path, "Skipping directory");
            return Ok(self.skipped(path, SkipReason::Directory));
        }

        if !self.config.is_supported(path) {
            trace!(?path, "Skipping unsupported file");
            return Ok(self.skipped(path, SkipReason::Unsupported));
        }

        let date = match self.read_capture_date(path) {
            Ok(Some(date)) => date,
            Ok(None) => {
                warn!(?path, "Date is missing");
                return Ok(self.skipped(path, SkipReason::DateMissing));
            }
            Err(e) => {
                warn!(?path, error = %e, "Error extracting date");
                self.stats.failed += 1;
                return Ok(self.skipped(path, SkipReason::DecodeFailed(e.to_string())));
            }
        };

        let dest_dir = target_dir(&self.config.root_dir, &date);
        fs::create_dir_all(&dest_dir).map_err(|source| Error::CreateDir {
            path: dest_dir.clone(),
            source,
        })?;

        let dest = target_path(&self.config.root_dir, &date, entry.file_name());
        if dest.is_file() {
            warn!(destination = ?dest, "Destination exists and will be overwritten");
        }

        let renamed = fs::rename(path, &dest);
        info!(
            source = ?path,
            destination = ?dest,
            timestamp = %date,
            "{} -> {}",
            path.display(),
            dest.display()
        );
        renamed.map_err(|source| Error::Move {
            from: path.to_path_buf(),
            to: dest.clone(),
            source,
        })?;

        self.stats.moved += 1;
        Ok(FileOutcome {
            source: path.to_path_buf(),
            destination: Some(dest),
            capture_date: Some(date),
            status: OutcomeStatus::Moved,
        })
    }

    /// Open the file and decode its capture date. The handle is closed
    /// before this returns.
    fn read_capture_date(&self, path: &Path) -> Result<Option<NaiveDateTime>> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        self.decoder.decode(&mut reader)
    }

    fn skipped(&mut self, path: &Path, reason: SkipReason) -> FileOutcome {
        self.stats.skipped += 1;
        FileOutcome {
            source: path.to_path_buf(),
            destination: None,
            capture_date: None,
            status: OutcomeStatus::Skipped(reason),
        }
    }
}
