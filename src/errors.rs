//! Centralized error handling.
//!
//! Provides a unified error type for handler setup. Per the crate contract,
//! these errors never escape `build_logger`: file-handler failures are
//! downgraded to a warning notice on the affected logger.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up log handlers.
#[derive(Error, Debug)]
pub enum LogError {
    // Level parsing
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    // Filesystem
    #[error("could not create log directory {path:?}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open log file {path:?}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias
pub type LogResult<T> = Result<T, LogError>;

/// Convenience constructors
impl LogError {
    pub fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LogError::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn open_log_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LogError::OpenLogFile {
            path: path.into(),
            source,
        }
    }
}
