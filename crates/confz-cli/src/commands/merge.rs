//! `confz merge` command implementation.

use camino::Utf8PathBuf;
use confz_core::error::{ConfzError, ConfzResult};
use serde_json::Value;
use super::{build_store, render_json, CommandContext, CommandStatus};

/// Execute the `confz merge` command
pub async fn execute(
    files: &[Utf8PathBuf],
    key: Option<&str>,
    ctx: &CommandContext,
) -> ConfzResult<CommandStatus> {
    match merged(files, key, ctx).await? {
        Some(value) => {
            ctx.output.json(&render_json(&value));
            Ok(CommandStatus::Success)
        }
        None => {
            ctx.output.warn(&format!("No value at '{}'", key.unwrap_or_default()));
            Ok(CommandStatus::NotFound)
        }
    }
}

/// Layer `files` in order and return the whole document, or the value at `key`
pub async fn merged(
    files: &[Utf8PathBuf],
    key: Option<&str>,
    ctx: &CommandContext,
) -> ConfzResult<Option<Value>> {
    let (base, layers) = files.split_first().ok_or_else(|| ConfzError::InvalidSource {
        reason: "at least one document is required".to_string(),
    })?;

    let store = build_store(base, layers, ctx).await?;
    match key {
        Some(key) => store.get(key),
        None => Ok(Some(store.snapshot())),
    }
}
