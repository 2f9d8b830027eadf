//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Only operations whose caller must decide how to proceed return it.
/// Classification helpers (pattern matching, symlink resolution, sniffing)
/// log and degrade to a safe default instead.
#[derive(Debug, Error)]
pub enum FilesError {
    /// Represents an I/O error, typically from file system operations.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// The temporary-file area could not be used to create a scratch directory.
    #[error("Unable to create temp directory in {1}: {0}")]
    TempCreate(#[source] std::io::Error, PathBuf),

    /// A size field was decoded from a slice that is not exactly 4 bytes long.
    #[error("Expected 4 bytes for a size field, got {0}")]
    InvalidSizeBytes(usize),

    /// Represents a failure while walking a directory tree.
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Convenience alias used throughout the `core` module.
pub type Result<T> = std::result::Result<T, FilesError>;
