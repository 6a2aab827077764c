//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// kwenv - Isolated configuration environments for kernel development workflows.
#[derive(Debug, Parser)]
#[command(name = "kwenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Cache root for per-environment kernel config artifacts
    #[arg(long, global = true, env = "KWENV_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new environment from the project's current config set
    Create(CreateArgs),

    /// Switch the project to a named environment
    Use(UseArgs),

    /// Leave the active environment, restoring plain config files
    Exit(ExitArgs),

    /// Delete an environment and its cached kernel config
    Destroy(DestroyArgs),

    /// List environments and show the active one
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Name of the environment to create
    pub name: String,
}

/// Arguments for the `use` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UseArgs {
    /// Name of the environment to activate
    pub name: String,
}

/// Arguments for the `exit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExitArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `destroy` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DestroyArgs {
    /// Name of the environment to destroy
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
