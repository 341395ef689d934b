//! Error types for the booking library.
//!
//! The booking flow itself has no failure modes: navigation and order
//! updates are total functions, and invalid invocations are silent no-ops.
//! Errors here cover the one external interface (the remote location
//! lookup) and input parsing at the interface seams.

use thiserror::Error;

/// Comprehensive error type for all booking operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Location lookup transport errors
    #[error("Lookup error: {message}")]
    Lookup {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Location lookup returned a non-success HTTP status
    #[error("Lookup request failed with status {status}")]
    LookupStatus { status: u16 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating lookup errors with a source.
pub struct LookupErrorBuilder {
    message: String,
}

impl LookupErrorBuilder {
    /// Create a new lookup error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> BookingError {
        BookingError::Lookup {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BookingError {
        BookingError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BookingError {
    /// Creates a builder for lookup errors.
    pub fn lookup(message: impl Into<String>) -> LookupErrorBuilder {
        LookupErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;
