//! Fail-soft and fail-loud error handling for store operations

use confz_core::{ConfzError, ConfzResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// How a store reacts to invalid keys and failed imports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the error and turn the operation into a no-op
    #[default]
    Lenient,
    /// Return the error to the caller
    Strict,
}

impl ErrorPolicy {
    /// Apply the policy to an error
    ///
    /// Under `Lenient` the error is logged and `fallback` is returned.
    pub fn handle<T>(self, error: ConfzError, fallback: T) -> ConfzResult<T> {
        match self {
            ErrorPolicy::Lenient => {
                warn!("CONFZ: {}", error);
                Ok(fallback)
            }
            ErrorPolicy::Strict => Err(error),
        }
    }

    /// Whether errors are returned to the caller
    pub fn is_strict(self) -> bool {
        matches!(self, ErrorPolicy::Strict)
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Lenient => f.write_str("lenient"),
            ErrorPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" | "soft" => Ok(ErrorPolicy::Lenient),
            "strict" | "loud" => Ok(ErrorPolicy::Strict),
            other => Err(format!("Unknown error policy '{}', expected 'lenient' or 'strict'", other)),
        }
    }
}

/// Store construction options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Error handling policy
    #[serde(default)]
    pub policy: ErrorPolicy,
}

impl StoreOptions {
    /// Options with the given error policy
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self { policy }
    }
}
