//! # Record Store Errors

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No document exists for the given identifier
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record with the same case-insensitive name pair already exists
    #[error("Student with the same name already exists: {first_name} {last_name}")]
    DuplicateName {
        first_name: String,
        last_name: String,
    },

    /// The storage medium rejected a write
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// A stored document could not be parsed during listing
    #[error("Corrupt document {key}: {reason}")]
    Corrupted { key: String, reason: String },

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(String),
}

impl StoreError {
    /// True when the error means "no such record"
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
