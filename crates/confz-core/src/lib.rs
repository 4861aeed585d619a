//! # confz-core
//!
//! Core types and errors shared across all confz crates.
//!
//! This crate provides:
//! - `ConfzError` enum for unified error handling
//! - `KeyPath`, the parsed form of a colon-delimited key string
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `error`: Error types and result aliases
//! - `types`: Core data types (KeyPath)

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ConfzError, ConfzResult};
pub use types::{KeyPath, DELIMITER, MAX_SEGMENTS};
