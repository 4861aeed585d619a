//! confz benchmarking suite
//!
//! Benchmarks for path reads and writes, deep merges, and document loading.

pub mod common;
pub mod fixtures;

pub use common::*;
pub use fixtures::*;
