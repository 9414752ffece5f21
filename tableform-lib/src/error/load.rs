//! Descriptor loading errors

use std::path::PathBuf;

/// Errors that can occur while reading a descriptor list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The descriptor file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid descriptor list.
    #[error("Invalid descriptor list: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
