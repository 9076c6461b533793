//! Error types for ticklist store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the task file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize the task list to JSON.
    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O on the task file or its directory failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Atomic replacement of the task file failed.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        /// Path of the file being replaced.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}
