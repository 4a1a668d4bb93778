//! Error types for NDJSON emission.

use thiserror::Error;

/// Errors that can occur while emitting fixture records.
#[derive(Error, Debug)]
pub enum EmitError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
