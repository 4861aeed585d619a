//! Safe nested access into JSON values
//!
//! `get_in` descends a possibly-partial structure and reports absence as
//! `None` instead of failing. `set_in` produces a new structure with a value
//! placed at a path, taking the old one by value so untouched siblings are
//! moved across rather than copied.

use serde_json::{Map, Value};

/// Resolve `segments` against `root`
///
/// Returns `None` for an empty path, or as soon as a segment is missing or
/// the current value is not an object. A stored JSON `null` is a present
/// value and is returned as `Some(&Value::Null)`.
pub fn get_in<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    if segments.is_empty() {
        return None;
    }

    segments
        .iter()
        .try_fold(root, |current, segment| current.as_object()?.get(*segment))
}

/// Resolve `segments` against `root`, returning `fallback` when absent
pub fn get_in_or<'a>(root: &'a Value, segments: &[&str], fallback: &'a Value) -> &'a Value {
    get_in(root, segments).unwrap_or(fallback)
}

/// Place `value` at `segments` inside `root`
///
/// - an empty path replaces `root` with `value`
/// - when `root` is not an object it is replaced by a fresh mapping holding
///   only the path
/// - a non-object met partway down is overwritten the same way
pub fn set_in(root: Value, segments: &[&str], value: Value) -> Value {
    let Some((first, rest)) = segments.split_first() else {
        return value;
    };

    let mut map = match root {
        Value::Object(map) => map,
        _ => return build_path(segments, value),
    };

    let child = match map.remove(*first) {
        Some(existing) => set_in(existing, rest, value),
        None => build_path(rest, value),
    };
    map.insert((*first).to_string(), child);

    Value::Object(map)
}

/// Build the minimal nested mapping holding `value` at `segments`
fn build_path(segments: &[&str], value: Value) -> Value {
    segments.iter().rev().fold(value, |leaf, segment| {
        let mut map = Map::with_capacity(1);
        map.insert((*segment).to_string(), leaf);
        Value::Object(map)
    })
}
