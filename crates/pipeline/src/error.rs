//! Error types for pipeline execution.

use thiserror::Error;

/// Errors raised while configuring or executing pipelets.
///
/// Absent or malformed boolean configuration values are not errors; they
/// read as `false`.
#[derive(Error, Debug)]
pub enum PipeletError {
    /// A required dictionary key is absent
    #[error("Missing required pipeline dictionary entry '{key}'")]
    MissingInput { key: String },

    /// A dictionary entry exists but holds a different type
    #[error("Pipeline dictionary entry '{key}' is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    /// A configuration properties line couldn't be parsed
    #[error("Config parse error at line {line}: {reason}")]
    ConfigParse { line: usize, reason: String },

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A filter failed while processing products
    #[error("Filter failed: {0}")]
    Filter(#[from] anyhow::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipeletError>;
