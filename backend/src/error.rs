//! Error types for the Monster Upload backend.
//!
//! - [`StoreError`] - upload storage and index errors
//! - [`ServerError`] - top-level server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the upload store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to write a file or the index.
    #[error("Storage IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The index file is not valid JSON.
    #[error("Upload index is corrupt: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Filename is empty or points outside the upload directory.
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Store could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Listener could not be bound, or the server stopped with an error.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
