//! Error types for fixity-core

use std::path::PathBuf;

/// Result type for fixity-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fixity-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path given as the directory to scan is not a directory
    #[error("The provided path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// No manifest exists in the scanned directory
    #[error("Hash table file not found in the specified directory: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The manifest text could not be decoded
    #[error("Malformed manifest at line {line}: {message}")]
    ManifestParse { line: usize, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from fixity-fs
    #[error(transparent)]
    Fs(#[from] fixity_fs::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            line,
            message: message.into(),
        }
    }
}
