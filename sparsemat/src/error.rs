//! Error type for file and stream access

use std::path::{Path, PathBuf};

use sparsemat_core::{MatrixError, ParseError};

/// Errors surfaced to callers of the `sparsemat` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input does not follow the text format
    #[error("Error while processing file {}: {source}", .path.display())]
    Format { path: PathBuf, source: ParseError },

    /// Reading or writing the underlying file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Arithmetic was attempted on incompatible or overflowing operands
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    #[error("JSON error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn format(path: &Path, source: ParseError) -> Self {
        Error::Format {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file involved, if the error came from file access
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Format { path, .. } | Error::Io { path, .. } => Some(path),
            #[cfg(feature = "serde")]
            Error::Json { path, .. } => Some(path),
            Error::Matrix(_) => None,
        }
    }
}

/// Result type for `sparsemat` operations
pub type Result<T> = std::result::Result<T, Error>;
