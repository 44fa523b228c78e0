use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for common-interface operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `config.json` is missing, unreadable, or not valid JSON.
    #[error(
        "Configuration file config.json not found, verify that the data directory is correct. Dir: {data_dir}"
    )]
    ConfigNotFound { data_dir: String },

    /// Sidecar manifest for an input file or table does not exist.
    #[error("Manifest not found: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// Caller-supplied manifest options are malformed.
    #[error("{0}")]
    Validation(String),

    /// A document exists but could not be decoded.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that only branch on kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigNotFound { .. } | AppError::ManifestNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::Validation(_) | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
        }
    }
}
