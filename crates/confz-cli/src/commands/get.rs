//! `confz get` command implementation.
//!
//! Prints the value stored at a key, after layering any override documents
//! on top of the base document.

use camino::{Utf8Path, Utf8PathBuf};
use confz_core::error::ConfzResult;
use serde_json::Value;
use super::{build_store, render_json, CommandContext, CommandStatus};

/// Execute the `confz get` command
pub async fn execute(
    file: &Utf8Path,
    key: &str,
    layers: &[Utf8PathBuf],
    ctx: &CommandContext,
) -> ConfzResult<CommandStatus> {
    match resolve(file, key, layers, ctx).await? {
        Some(value) => {
            ctx.output.json(&render_json(&value));
            Ok(CommandStatus::Success)
        }
        None => {
            ctx.output.warn(&format!("No value at '{}'", key));
            Ok(CommandStatus::NotFound)
        }
    }
}

/// Resolve `key` against the layered documents
pub async fn resolve(
    file: &Utf8Path,
    key: &str,
    layers: &[Utf8PathBuf],
    ctx: &CommandContext,
) -> ConfzResult<Option<Value>> {
    let store = build_store(file, layers, ctx).await?;
    store.get(key)
}
