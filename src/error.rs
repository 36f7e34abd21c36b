//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! `BookError` is what the record store and command handlers return; the
//! dispatcher turns it into the fixed text shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the address book and command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A value failed validation (phone format, blank name)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A command was given fewer positional arguments than it needs
    #[error("Missing required arguments: {0}")]
    MissingArguments(String),

    /// Any other failure
    #[error("{0}")]
    Unexpected(String),
}

impl BookError {
    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Contact not found.".to_string(),
            Self::InvalidValue(_) => "Invalid value provided.".to_string(),
            Self::MissingArguments(_) => "Missing required arguments.".to_string(),
            Self::Unexpected(details) => format!("An unexpected error occurred: {}", details),
        }
    }
}

impl From<ValidationError> for BookError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidValue(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
