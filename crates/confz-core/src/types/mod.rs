//! Core data types for confz.

pub mod key;

// Re-export main types
pub use key::{KeyPath, DELIMITER, MAX_SEGMENTS};
