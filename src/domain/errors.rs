// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the application scaffold.
//!
//! This module defines the error types that can occur when resolving configuration.
//! All errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// There are exactly two observable failure classes at the process boundary: a
/// missing required key (expected, reported with a clean message) and everything
/// else (reported as a shortened diagnostic). The enum is `#[non_exhaustive]` to
/// allow future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use hexapp::domain::errors::ConfigError;
///
/// let err = ConfigError::RequiredKeyMissing {
///     key: "TEMP_FOLDER".to_string(),
/// };
/// assert_eq!(err.to_string(), "Configuration for TEMP_FOLDER is not set");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required configuration key was absent from every source.
    ///
    /// Constructed exactly at the point a required lookup fails and propagated
    /// unchanged to the outermost boundary.
    #[error("Configuration for {key} is not set")]
    RequiredKeyMissing {
        /// The key that was not set
        key: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `RequiredKeyMissing` error for the given key.
    pub fn required_key_missing(key: impl Into<String>) -> Self {
        ConfigError::RequiredKeyMissing { key: key.into() }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
