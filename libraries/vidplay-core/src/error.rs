/// Core error types for vidplay
use thiserror::Error;

use crate::types::VideoId;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or loading a video catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed line in a text catalog (1-based line number)
    #[error("Invalid catalog entry on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The same video id appears twice
    #[error("Duplicate video id: {0}")]
    DuplicateVideo(VideoId),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON catalog errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a parse error for the given line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
