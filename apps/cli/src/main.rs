//! Stencil command-line interface.
//!
//! Wires the execution engine to concrete drivers (HTTP content
//! fetcher, file-backed catalog) and exposes two subcommands: `run`
//! executes a single action and prints its outputs as JSON, `actions`
//! lists what is registered.

#![forbid(unsafe_code)]

mod config;
mod drivers;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stencil_action_builtin::BuiltinActions;
use stencil_engine::{ActionExecutor, ExecutionRequest, MemoryConfig};

use crate::drivers::{FileCatalog, HttpFetcher};

#[derive(Parser)]
#[command(name = "stencil", version, about = "Single-action execution engine")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "STENCIL_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory under which per-execution workspaces are provisioned.
    #[arg(long, global = true, env = "STENCIL_WORKING_DIR", value_name = "DIR")]
    working_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute one action and print its outputs as JSON.
    Run {
        /// Action identifier, e.g. `debug:log`.
        action_id: String,

        /// Input payload as a JSON object.
        #[arg(long, default_value = "{}")]
        input: String,

        /// Reuse the same workspace across runs carrying this id.
        #[arg(long)]
        instance_id: Option<String>,

        /// JSON file with catalog entities keyed by entity ref.
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// List the registered actions.
    Actions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref(), cli.working_dir.as_deref())?;

    match cli.command {
        Command::Run {
            action_id,
            input,
            instance_id,
            catalog,
        } => run(config, &action_id, &input, instance_id, catalog.as_deref()).await,
        Command::Actions => {
            list_actions(&executor(config, FileCatalog::empty()));
            Ok(())
        }
    }
}

fn executor(config: MemoryConfig, catalog: FileCatalog) -> ActionExecutor {
    let source = BuiltinActions::new(Arc::new(catalog), Arc::new(HttpFetcher::new()));
    ActionExecutor::new(Arc::new(config), Arc::new(source))
}

async fn run(
    config: MemoryConfig,
    action_id: &str,
    input: &str,
    instance_id: Option<String>,
    catalog: Option<&Path>,
) -> anyhow::Result<()> {
    let payload: serde_json::Value =
        serde_json::from_str(input).context("parsing --input as JSON")?;
    let serde_json::Value::Object(input) = payload else {
        anyhow::bail!("--input must be a JSON object");
    };

    let catalog = match catalog {
        Some(path) => FileCatalog::load(path)?,
        None => FileCatalog::empty(),
    };

    let mut request = ExecutionRequest::new(action_id).with_input(input);
    if let Some(instance_id) = instance_id {
        request = request.with_instance_id(instance_id);
    }

    let outputs = executor(config, catalog).execute(request).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(outputs))?
    );
    Ok(())
}

fn list_actions(executor: &ActionExecutor) {
    executor.load_actions();
    for metadata in executor.list_actions() {
        println!(
            "{}  v{}  {}",
            metadata.id, metadata.version, metadata.description
        );
    }
}
