//! Colon-delimited key paths.
//!
//! A key such as `server:http:port` addresses the `port` entry inside the
//! `http` mapping of the top-level `server` value. There is no escaping
//! mechanism: a segment can never contain a literal `:`.

use crate::error::{ConfzError, ConfzResult};
use std::fmt;

/// Separator between path segments
pub const DELIMITER: char = ':';

/// Maximum number of segments in a key
///
/// Matches serde_json's parser recursion limit, so no loaded document is
/// deeper than a key can reach. Deeper values overflow the stack when they
/// are cloned or dropped.
pub const MAX_SEGMENTS: usize = 128;

/// A parsed key, borrowing its segments from the original string
///
/// # Examples
///
/// ```
/// use confz_core::KeyPath;
///
/// let key = KeyPath::parse("server:http:port").unwrap();
/// assert_eq!(key.head(), "server");
/// assert_eq!(key.rest(), &["http", "port"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Parse a key string, rejecting the empty key and keys with more than
    /// `MAX_SEGMENTS` segments
    ///
    /// Empty segments inside a non-empty key (`a::b`) are kept and name the
    /// empty-string entry at that level.
    pub fn parse(raw: &'a str) -> ConfzResult<Self> {
        if raw.is_empty() {
            return Err(ConfzError::invalid_key(raw, "keys must be non-empty strings"));
        }

        let segments: Vec<&'a str> = raw.splitn(MAX_SEGMENTS + 1, DELIMITER).collect();
        if segments.len() > MAX_SEGMENTS {
            return Err(ConfzError::invalid_key(
                abbreviate(raw),
                format!("keys may have at most {} segments", MAX_SEGMENTS),
            ));
        }

        Ok(Self { raw, segments })
    }

    /// The top-level key
    pub fn head(&self) -> &'a str {
        self.segments[0]
    }

    /// Segments below the top-level key
    pub fn rest(&self) -> &[&'a str] {
        &self.segments[1..]
    }

    /// All segments, top-level key first
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the key addresses a top-level slot directly
    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 1
    }

    /// The key string this path was parsed from
    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

/// Shorten a key for error messages
fn abbreviate(raw: &str) -> String {
    const SHOWN: usize = 64;
    match raw.char_indices().nth(SHOWN) {
        Some((end, _)) => format!("{}...", &raw[..end]),
        None => raw.to_string(),
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
