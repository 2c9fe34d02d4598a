//! Error types for palette-gen operations.
//!
//! The color math itself is total; only strict parsing, scheme-name lookup
//! and configuration loading can fail.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in palette-gen operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Color string not recognized by the strict parser.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Scheme name is not one of the six categories (or `all`).
    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}
