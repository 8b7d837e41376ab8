//! Core error types for the medbill application.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest) are converted to these types by the client crate.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the claim drafting core.
///
/// Transport-specific errors are wrapped in string form to keep this type
/// independent of any particular HTTP client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Claim error: {0}")]
    Claim(#[from] ClaimError),

    #[error("Billing API error: {0}")]
    Api(#[from] ApiError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
///
/// These are recoverable: the draft stays in place and the message is
/// surfaced inline next to the offending field.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("'{0}' is not a valid claim status")]
    InvalidStatus(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

/// Errors raised by claim draft operations.
#[derive(Error, Debug)]
pub enum ClaimError {
    /// The draft is missing data required for submission. Blocks the
    /// submit action; the user must fill in the missing pieces.
    #[error("Claim is incomplete: {0}")]
    Incomplete(String),

    /// A line item operation addressed an index outside the collection.
    /// This cannot happen through normal form interaction and signals a
    /// caller defect rather than a user mistake.
    #[error("Line item index {index} is out of range (collection holds {len} items)")]
    ItemIndexOutOfRange { index: usize, len: usize },

    /// A mutation or second submit was attempted while a submission is
    /// already in flight for this draft.
    #[error("A submission is already in flight for this claim")]
    SubmissionInFlight,

    /// The draft was already submitted successfully and can no longer be
    /// edited or resubmitted.
    #[error("Claim draft was already submitted")]
    DraftFinished,
}

/// Errors from the external billing API.
///
/// Recoverable from the draft's perspective: submission failure returns the
/// draft to the editing state with the message retained for display.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend rejected the request ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Api(ApiError::Decode(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
