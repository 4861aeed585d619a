//! Error types and result aliases for confz operations.
//!
//! Provides a unified error type for key validation, bulk imports and the
//! file-load collaborator, with actionable error messages.

use thiserror::Error;

/// Unified error type for all confz operations
#[derive(Error, Debug)]
pub enum ConfzError {
    // Key errors
    #[error("Key \"{key}\" is not a valid key: {reason}")]
    InvalidKey { key: String, reason: String },

    // Import errors
    #[error("Cannot load configuration: {reason}")]
    InvalidSource { reason: String },

    #[error("Cannot read configuration from {path}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse JSON in {path}: {message}")]
    SourceParse { path: String, message: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for confz operations
pub type ConfzResult<T> = Result<T, ConfzError>;

impl ConfzError {
    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a source read error from std::io::Error
    pub fn source_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Create a source parse error
    pub fn source_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error is recoverable
    ///
    /// Every store-level error leaves the store unchanged, so only plain IO
    /// failures outside the store are treated as fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConfzError::Io { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ConfzError::InvalidKey { .. } => {
                Some("Use a short non-empty key such as 'server' or 'server:http:port'")
            },
            ConfzError::InvalidSource { .. } => {
                Some("Pass a JSON object whose top-level keys become configuration keys")
            },
            ConfzError::SourceRead { .. } => Some("Check that the file exists and is readable"),
            ConfzError::SourceParse { .. } => {
                Some("Make sure the file contains a single JSON object")
            },
            _ => None,
        }
    }
}
