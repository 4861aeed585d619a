//! `confz check` command implementation.
//!
//! Loads a document with the file loader directly, so read and parse errors
//! are always reported regardless of the error policy.

use camino::Utf8Path;
use confz::loader::load_from_file;
use confz_core::error::ConfzResult;
use super::{CommandContext, CommandStatus};

/// Execute the `confz check` command
pub async fn execute(file: &Utf8Path, ctx: &CommandContext) -> ConfzResult<CommandStatus> {
    let keys = top_level_keys(file).await?;

    ctx.output.success(&format!("{} is a valid configuration document", file));
    if keys.is_empty() {
        ctx.output.info("No top-level keys");
    } else {
        ctx.output.info(&format!("Top-level keys ({}):", keys.len()));
        for key in &keys {
            ctx.output.info(&format!("  {}", key));
        }
    }

    Ok(CommandStatus::Success)
}

/// Sorted top-level keys of a document
pub async fn top_level_keys(file: &Utf8Path) -> ConfzResult<Vec<String>> {
    let document = load_from_file(file).await?;
    let mut keys: Vec<String> = document.keys().cloned().collect();
    keys.sort();
    Ok(keys)
}
