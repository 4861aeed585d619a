//! Path-addressed configuration store
//!
//! A `Store` maps top-level names to JSON values. Nested values are read and
//! written through colon-delimited keys (`server:http:port`), and `extend`
//! deep-merges overrides without destroying unrelated sibling keys.
//!
//! ```
//! use confz::Store;
//! use serde_json::json;
//!
//! let mut store = Store::new();
//! store.load(json!({ "foo": { "bar": "baz" } })).unwrap();
//! store.set("foo:x", json!("y")).unwrap();
//!
//! assert_eq!(store.get("foo").unwrap(), Some(json!({ "bar": "baz", "x": "y" })));
//! ```

pub mod path;
pub mod merge;
pub mod policy;
pub mod loader;
pub mod store;

// Re-export main types
pub use confz_core::{ConfzError, ConfzResult, KeyPath, MAX_SEGMENTS};
pub use merge::deep_merge;
pub use path::{get_in, get_in_or, set_in};
pub use policy::{ErrorPolicy, StoreOptions};
pub use store::{ConfigSource, Store};
