//! Error types for senderos-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the core library.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A numeric grade outside 1-4 was passed across the wire boundary.
    #[error("invalid grade value: {0} (expected 1-4)")]
    InvalidGrade(u8),

    /// An imported progress document failed validation.
    #[error("invalid progress document: {reason}")]
    InvalidImport { reason: String },

    /// The progress document could not be serialized.
    #[error("failed to serialize progress document")]
    Export(#[source] serde_json::Error),
}
