//! Story loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a story file.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("Failed to read story file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse story file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Story file {path} contains no messages")]
    Empty { path: PathBuf },
}
