//! # confz-cli
//!
//! Read-only command line access to confz configuration documents.
//!
//! This is the entry point for the `confz` tool. It handles command parsing,
//! sets up logging and error handling, and dispatches to the command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use confz::ErrorPolicy;
use confz_core::error::{ConfzError, ConfzResult};
use std::process::ExitCode;
use tracing::{debug, error};

mod commands;
mod output;

use commands::{CommandContext, CommandStatus};
use output::errors::ErrorFormatter;

/// Query and layer JSON configuration documents by colon-delimited keys
#[derive(Parser)]
#[command(name = "confz", version, about = "Query and layer JSON configuration documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How to treat unreadable files and invalid keys: `lenient` warns and
    /// skips them, `strict` fails
    #[arg(
        long,
        global = true,
        env = "CONFZ_POLICY",
        value_name = "POLICY",
        default_value_t = ErrorPolicy::Lenient
    )]
    pub policy: ErrorPolicy,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value stored at a key
    Get {
        /// Configuration document
        file: Utf8PathBuf,
        /// Key such as `server:http:port`
        key: String,
        /// Documents layered on top of FILE, in order
        #[arg(short, long = "layer", value_name = "FILE")]
        layers: Vec<Utf8PathBuf>,
    },
    /// Layer documents on top of each other and print the result
    Merge {
        /// Base document followed by its overrides
        #[arg(required = true, num_args = 1..)]
        files: Vec<Utf8PathBuf>,
        /// Only print the value at this key
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Check that a document can be loaded
    Check {
        /// Configuration document
        file: Utf8PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting confz v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(status) => status.into(),
        Err(err) => {
            eprint!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> ConfzResult<CommandStatus> {
    // Create Tokio runtime for the async file loader
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| ConfzError::io("Failed to create async runtime".to_string(), e))?;

    debug!("Error policy: {}", cli.policy);
    if cli.policy.is_strict() {
        debug!("Unreadable files and invalid keys abort the command");
    }

    rt.block_on(async {
        let ctx = CommandContext::new(cli.policy);
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("confz={},confz_core={}", level, level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("confz encountered an unexpected error: {}", panic_info);
        eprintln!("confz crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
