//! Configuration types for the photo date sorter

use std::path::{Path, PathBuf};

/// Configuration for a single organizing run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose direct children are scanned and which receives the
    /// year/month/day tree
    pub root_dir: PathBuf,

    /// Supported extensions, lowercase and without the leading dot
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            extensions: vec!["jpg".into(), "heic".into()],
        }
    }
}

impl Config {
    /// Create a configuration for `root_dir` with the default extensions
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Check if a file extension is supported (case-insensitive)
    pub fn is_supported_ext(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.extensions.iter().any(|e| e == &ext_lower)
    }

    /// Check if a path carries a supported extension
    ///
    /// The extension is whatever follows the last `.` of the file name, so a
    /// bare `.jpg` counts as a JPEG. File contents are never inspected.
    pub fn is_supported(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| self.is_supported_ext(ext))
    }
}
