//! Command implementations and dispatch logic.
//!
//! Each command is implemented as an async function that takes a
//! CommandContext. Commands never write configuration files.

use camino::Utf8Path;
use confz::{ErrorPolicy, Store};
use confz_core::error::ConfzResult;
use serde_json::Value;
use std::process::ExitCode;
use tracing::info;

pub mod check;
pub mod get;
pub mod merge;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub policy: ErrorPolicy,
    pub output: OutputHandler,
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// The requested key holds no value
    NotFound,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::NotFound => ExitCode::from(1),
        }
    }
}

impl CommandContext {
    /// Create a new command context
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            output: OutputHandler::new(),
        }
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> ConfzResult<CommandStatus> {
    match command {
        Commands::Get { file, key, layers } => {
            info!("Reading '{}' from {} ({} layers)", key, file, layers.len());
            get::execute(&file, &key, &layers, ctx).await
        }
        Commands::Merge { files, key } => {
            info!("Merging {} documents", files.len());
            merge::execute(&files, key.as_deref(), ctx).await
        }
        Commands::Check { file } => {
            info!("Checking {}", file);
            check::execute(&file, ctx).await
        }
    }
}

/// Load `base` and layer every document of `layers` on top of it
pub async fn build_store<P: AsRef<Utf8Path>>(
    base: &Utf8Path,
    layers: &[P],
    ctx: &CommandContext,
) -> ConfzResult<Store> {
    let mut store = Store::with_policy(ctx.policy);
    store.load_file(base).await?;

    for layer in layers {
        store.layer_file(layer).await?;
    }

    Ok(store)
}

/// Render a value as pretty JSON
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
