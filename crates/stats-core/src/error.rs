//! Error types for descriptive statistics
//!
//! Provides a unified error type for all stats crates. Per-line parse failures
//! are not part of this enum: they are recoverable and live in
//! [`crate::ParseError`], collected alongside the valid samples.

use std::path::PathBuf;
use thiserror::Error;

use crate::sample::ParseError;

/// Core error type for statistics runs
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("Cannot read '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every line was rejected, or the input was empty
    #[error("No valid data found ({} lines rejected)", .rejected.len())]
    EmptyDataset { rejected: Vec<ParseError> },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error means "nothing to compute" rather than a failure
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, Self::EmptyDataset { .. })
    }

    /// Whether the input file does not exist, as opposed to existing but
    /// being unreadable
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
