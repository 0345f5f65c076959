//! Error types for the photo date sorter

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for photo date sorter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the photo date sorter
///
/// `DirectoryAccess`, `CreateDir` and `Move` abort a run. The remaining
/// variants are raised per file and only ever cause that file to be skipped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} -> {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read EXIF data: {message}")]
    ExifRead { message: String },
}
