// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // User-facing output goes to stdout; diagnostics to the tracing layer,
    // silenced below warn unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let root = cli.root.as_path();
    let registry = cli.registry.as_deref();

    match &cli.command {
        Commands::Init => commands::cmd_init(root),
        Commands::Add { names, overwrite } => {
            commands::cmd_add(root, registry, names, *overwrite)
        }
        Commands::Status { name, offline } => {
            commands::cmd_status(root, registry, name.as_deref(), *offline)
        }
        Commands::Diff { name } => commands::cmd_diff(root, registry, name),
        Commands::Update {
            names,
            force,
            dry_run,
        } => commands::cmd_update(root, registry, names, *force, *dry_run),
        Commands::Remove { name } => commands::cmd_remove(root, name),
        Commands::List => commands::cmd_list(root, registry),
    }
}
