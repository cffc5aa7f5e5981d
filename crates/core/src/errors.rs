//! Core error types for the Debtfolio engine.
//!
//! Every failure in this crate is data-shaped: it names the offending record or
//! setting and can be recovered from by correcting or filtering the input.

use thiserror::Error;

use crate::loans::LoanError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the debt engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Loan record rejected: {0}")]
    Loan(#[from] LoanError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid dashboard settings: {0}")]
    Settings(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err.to_string())
    }
}
