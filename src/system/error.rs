//! Error types and handling
//!
//! This module contains the error type shared by user and resource
//! construction and by roster file persistence.

use thiserror::Error;

/// Errors that can occur while building or persisting a roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// A constructor received an empty name or a negative level
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A roster file line could not be parsed
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord {
        /// 1-based line number in the roster file
        line: usize,
        /// The offending line as read
        content: String,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RosterError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a malformed record error
    pub fn malformed_record(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedRecord { line, content: content.into() }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            RosterError::InvalidArgument(_) => "Invalid Argument",
            RosterError::MalformedRecord { .. } => "Malformed Record",
            RosterError::Io(_) => "IO",
            RosterError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
