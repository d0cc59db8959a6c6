//! Error types for configuration loading and the CLI
//!
//! Schedule evaluation itself never fails; these errors only arise while
//! turning files and command-line input into a `ScheduleRequest`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lrpreview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the configuration boundary
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse params document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid scheduler '{0}' (must be one of: StepLR, CosineAnnealingLR, ReduceLROnPlateau, none)")]
    UnknownScheduler(String),

    #[error("Invalid parameter override '{0}' (expected key=value)")]
    InvalidOverride(String),
}

impl Error {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
