//! Core error types for Confectory.

use thiserror::Error;

/// Core error type for Confectory operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Candy kind not recognized.
    #[error("Unknown candy kind: {0}")]
    UnknownKind(String),

    /// Invalid candy data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
