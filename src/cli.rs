// src/cli.rs

//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "luman")]
#[command(author, version, about = "Distribute and track registry components with drift detection", long_about = None)]
pub struct Cli {
    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Registry URL (overrides the configured registry)
    #[arg(long, global = true)]
    pub registry: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a project configuration and an empty installation manifest
    Init,

    /// Add components (and their registry dependencies) to the project
    Add {
        /// Component names to install
        #[arg(required = true)]
        names: Vec<String>,

        /// Replace components whose local files have been customized
        #[arg(long)]
        overwrite: bool,
    },

    /// Show installation status for one or all tracked components
    Status {
        /// Component name (all tracked components when omitted)
        name: Option<String>,

        /// Skip the registry version check
        #[arg(long)]
        offline: bool,
    },

    /// Show a line diff between local files and the registry's current version
    Diff {
        /// Component name
        name: String,
    },

    /// Update components to the registry's current version
    Update {
        /// Component names (all tracked components when omitted)
        names: Vec<String>,

        /// Update customized components, discarding local edits
        #[arg(long)]
        force: bool,

        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Stop tracking a component (installed files are left in place)
    Remove {
        /// Component name
        name: String,
    },

    /// List components published in the registry
    List,
}
