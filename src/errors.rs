/*!
 * Error types for the dialectai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the generation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Validation failure for a translation request, carrying field-level messages
///
/// Validation failures are fatal to the request and surfaced to the caller
/// immediately; they are never masked by the fallback path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid translation request: {}", self.describe())]
pub struct ValidationError {
    /// Pairs of (field name, error message)
    pub errors: Vec<(String, String)>,
}

impl ValidationError {
    /// Create a validation error for a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![(field.into(), message.into())],
        }
    }

    /// Add another field error
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.push((field.into(), message.into()));
        self
    }

    /// Join all field messages into a single description
    pub fn describe(&self) -> String {
        self.errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the generation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Invalid translation request
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
