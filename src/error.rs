//! Error types for finalizing and rendering request records

use thiserror::Error;

/// Errors surfaced by the request logger
#[derive(Debug, Error)]
pub enum SlogError {
    /// `write_logs` was called on a record that has already been written
    #[error("request record has already been finalized")]
    AlreadyFinalized,

    /// The record could not be encoded as JSON
    #[error("failed to encode request record as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing the rendered record to the sink failed
    #[error("failed to write request record to sink: {0}")]
    Io(#[from] std::io::Error),

    /// A previous writer panicked while holding the sink lock
    #[error("sink lock poisoned by a panicking writer")]
    SinkPoisoned,

    /// A mode string did not name a known rendering mode
    #[error("unknown logger mode '{0}' (expected 'development' or 'production')")]
    UnknownMode(String),
}

/// Result alias for request logger operations
pub type Result<T> = std::result::Result<T, SlogError>;
