//! The path-addressed configuration store
//!
//! Values handed to the store are moved in, and every read hands out a deep
//! clone, so nothing inside the store is ever reachable from the outside.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use confz_core::{ConfzError, ConfzResult, KeyPath};
use serde_json::{Map, Value};
use tracing::debug;

use crate::loader::{self, kind_of};
use crate::merge::deep_merge;
use crate::path::{get_in, set_in};
use crate::policy::{ErrorPolicy, StoreOptions};

#[cfg(test)]
mod tests;

/// Where a bulk import came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// An in-memory JSON object
    Object,
    /// A configuration document on disk
    File(Utf8PathBuf),
}

/// In-process configuration store
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Top-level key to root value
    values: HashMap<String, Value>,
    /// Successful bulk imports, in order
    sources: Vec<ConfigSource>,
    options: StoreOptions,
}

impl Store {
    /// Create an empty store with the lenient error policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create an empty store with the given error policy
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self::with_options(StoreOptions::with_policy(policy))
    }

    /// Current error policy
    pub fn policy(&self) -> ErrorPolicy {
        self.options.policy
    }

    /// Bulk import every key of a JSON object
    ///
    /// Existing top-level keys with the same name are replaced. Any other
    /// kind of value is an invalid source.
    pub fn load(&mut self, source: Value) -> ConfzResult<()> {
        match source {
            Value::Object(map) => {
                self.load_map(map);
                Ok(())
            }
            other => {
                let error = ConfzError::InvalidSource {
                    reason: format!("source must be an object, found {}", kind_of(&other)),
                };
                self.policy().handle(error, ())
            }
        }
    }

    /// Bulk import every key of a JSON map
    pub fn load_map(&mut self, map: Map<String, Value>) {
        self.import(map, ConfigSource::Object);
    }

    /// Bulk import a configuration document from disk
    ///
    /// On a read or parse failure the store is left unchanged.
    pub async fn load_file(&mut self, path: impl AsRef<Utf8Path>) -> ConfzResult<()> {
        let path = path.as_ref();
        match loader::load_from_file(path).await {
            Ok(map) => {
                self.import(map, ConfigSource::File(path.to_path_buf()));
                Ok(())
            }
            Err(error) => self.policy().handle(error, ()),
        }
    }

    /// Deep-merge every top-level key of `overlay` into the store
    ///
    /// Objects are merged, anything else replaces the stored value.
    pub fn layer(&mut self, overlay: Map<String, Value>) {
        self.apply_layer(overlay, ConfigSource::Object);
    }

    /// Deep-merge a configuration document from disk into the store
    pub async fn layer_file(&mut self, path: impl AsRef<Utf8Path>) -> ConfzResult<()> {
        let path = path.as_ref();
        match loader::load_from_file(path).await {
            Ok(map) => {
                self.apply_layer(map, ConfigSource::File(path.to_path_buf()));
                Ok(())
            }
            Err(error) => self.policy().handle(error, ()),
        }
    }

    /// Read the value at `key`
    ///
    /// Returns a deep clone, or `None` when nothing is stored there.
    pub fn get(&self, key: &str) -> ConfzResult<Option<Value>> {
        let key = match KeyPath::parse(key) {
            Ok(key) => key,
            Err(error) => return self.policy().handle(error, None),
        };

        Ok(self.lookup(&key).cloned())
    }

    /// Store `value` at `key`, preserving sibling keys at every level
    pub fn set(&mut self, key: &str, value: Value) -> ConfzResult<()> {
        let key = match KeyPath::parse(key) {
            Ok(key) => key,
            Err(error) => return self.policy().handle(error, ()),
        };

        self.write(&key, value);
        Ok(())
    }

    /// Deep-merge `value` into whatever is stored at `key`
    ///
    /// `value` wins on conflicting keys. A missing or `null` current value
    /// counts as an empty object. A non-object `value` never replaces the
    /// current value, so extending with one is a no-op.
    pub fn extend(&mut self, key: &str, value: Value) -> ConfzResult<()> {
        let key = match KeyPath::parse(key) {
            Ok(key) => key,
            Err(error) => return self.policy().handle(error, ()),
        };

        if !value.is_object() {
            debug!("Ignoring extend of '{}' with {}", key, kind_of(&value));
            return Ok(());
        }

        let original = match self.lookup(&key) {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(current) => current.clone(),
        };
        self.write(&key, deep_merge(original, value));
        Ok(())
    }

    /// Whether a value is stored at `key`
    pub fn contains(&self, key: &str) -> bool {
        KeyPath::parse(key)
            .map(|key| self.lookup(&key).is_some())
            .unwrap_or(false)
    }

    /// Top-level keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Deep clone of the whole store as a single object
    pub fn snapshot(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Successful bulk imports, oldest first
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    fn lookup(&self, key: &KeyPath<'_>) -> Option<&Value> {
        let root = self.values.get(key.head())?;
        if key.is_top_level() {
            Some(root)
        } else {
            get_in(root, key.rest())
        }
    }

    fn write(&mut self, key: &KeyPath<'_>, value: Value) {
        let head = key.head();
        let root = if key.is_top_level() {
            value
        } else {
            let subtree = self
                .values
                .remove(head)
                .unwrap_or_else(|| Value::Object(Map::new()));
            set_in(subtree, key.rest(), value)
        };
        self.values.insert(head.to_string(), root);
    }

    fn import(&mut self, map: Map<String, Value>, source: ConfigSource) {
        debug!("Loading {} keys from {:?}", map.len(), source);
        self.values.extend(map);
        self.sources.push(source);
    }

    fn apply_layer(&mut self, overlay: Map<String, Value>, source: ConfigSource) {
        debug!("Layering {} keys from {:?}", overlay.len(), source);
        for (key, incoming) in overlay {
            let value = match (self.values.remove(&key), incoming) {
                (Some(existing @ Value::Object(_)), incoming @ Value::Object(_)) => {
                    deep_merge(existing, incoming)
                }
                (_, incoming) => incoming,
            };
            self.values.insert(key, value);
        }
        self.sources.push(source);
    }
}
