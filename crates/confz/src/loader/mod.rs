//! Reading configuration documents from disk
//!
//! A configuration document is a JSON file whose top level is an object;
//! each of its keys becomes a top-level store key.

use camino::Utf8Path;
use confz_core::{ConfzError, ConfzResult};
use serde_json::{Map, Value};

/// Parse a configuration document
///
/// `origin` names the document in error messages.
pub fn parse_document(content: &str, origin: &str) -> ConfzResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| ConfzError::source_parse(origin, e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfzError::source_parse(
            origin,
            format!("top-level value must be an object, found {}", kind_of(&other)),
        )),
    }
}

/// Read and parse a configuration document
pub async fn load_from_file(path: &Utf8Path) -> ConfzResult<Map<String, Value>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfzError::source_read(path.as_str(), e))?;

    parse_document(&content, path.as_str())
}

/// Human readable name of a value's kind
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
