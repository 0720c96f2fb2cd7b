//! Error types for loading, merging and writing TO summaries

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a TO summary report
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Result type for TO summary operations
pub type SummaryResult<T> = Result<T, SummaryError>;
