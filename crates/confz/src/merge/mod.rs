//! Deep merge of JSON mappings
//!
//! Only object/object pairs are merged recursively. Arrays and scalars are
//! opaque leaves: they are replaced as a whole, never spliced.

use serde_json::Value;

/// Merge `overlay` into `base`, producing a new value
///
/// When either side is not an object, `base` is returned unchanged. For two
/// objects, every key of `overlay` ends up in the result: nested objects are
/// merged recursively, any other pairing lets the overlay value win. Keys
/// only present in `base` are kept.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut merged), Value::Object(overlay)) => {
            for (key, incoming) in overlay {
                let value = match (merged.remove(&key), incoming) {
                    (Some(existing @ Value::Object(_)), incoming @ Value::Object(_)) => {
                        deep_merge(existing, incoming)
                    }
                    (_, incoming) => incoming,
                };
                merged.insert(key, value);
            }
            Value::Object(merged)
        }
        (base, _) => base,
    }
}
