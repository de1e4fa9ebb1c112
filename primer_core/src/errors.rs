//! # Error Types
//!
//! Structured error types for primer_core. Every variant carries enough
//! context to print a useful message and to serialize cleanly when a
//! front end reports errors as JSON.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::errors::{PrimerError, PrimerResult};
//!
//! fn validate_increment(increment: i64) -> PrimerResult<()> {
//!     if increment <= 0 {
//!         return Err(PrimerError::invalid_input(
//!             "increment",
//!             increment.to_string(),
//!             "Increment must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_increment(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for primer_core operations
pub type PrimerResult<T> = Result<T, PrimerError>;

/// Structured error type for the primer programs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PrimerError {
    /// An input value could not be parsed or is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Input ended before a required value was read
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    /// The two-pass split copied a different number of elements than it counted
    #[error("Size of {list} list ({expected}) does not equal number of {list} integers copied ({copied})")]
    PartitionMismatch {
        list: String,
        expected: usize,
        copied: usize,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Another process holds the lock on an output file
    #[error("File locked: '{path}' is locked by another process")]
    FileLocked { path: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PrimerError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimerError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        PrimerError::MissingInput { field: field.into() }
    }

    /// Create a PartitionMismatch error
    pub fn partition_mismatch(list: impl Into<String>, expected: usize, copied: usize) -> Self {
        PrimerError::PartitionMismatch {
            list: list.into(),
            expected,
            copied,
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PrimerError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>) -> Self {
        PrimerError::FileLocked { path: path.into() }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PrimerError::FileLocked { .. })
    }

    /// True for errors caused by what the user typed, as opposed to I/O
    /// or internal failures.
    pub fn is_input_error(&self) -> bool {
        matches!(self, PrimerError::InvalidInput { .. } | PrimerError::MissingInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PrimerError::InvalidInput { .. } => "INVALID_INPUT",
            PrimerError::MissingInput { .. } => "MISSING_INPUT",
            PrimerError::PartitionMismatch { .. } => "PARTITION_MISMATCH",
            PrimerError::FileError { .. } => "FILE_ERROR",
            PrimerError::FileLocked { .. } => "FILE_LOCKED",
            PrimerError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for PrimerError {
    fn from(e: serde_json::Error) -> Self {
        PrimerError::SerializationError { reason: e.to_string() }
    }
}
