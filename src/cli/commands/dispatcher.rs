//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit status for usage and precondition failures, matching the platform's
/// invalid-argument errno.
pub const EXIT_INVALID_ARG: i32 = 22;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and confirmations
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a failure result with the invalid-argument status.
    pub fn invalid_argument() -> Self {
        Self::failure(EXIT_INVALID_ARG)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    cache_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project and cache roots.
    pub fn new(project_root: PathBuf, cache_root: PathBuf) -> Self {
        Self {
            project_root,
            cache_root,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the cache root path.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Create(args) => {
                let cmd = super::create::CreateCommand::new(
                    &self.project_root,
                    &self.cache_root,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Use(args) => {
                let cmd = super::use_env::UseCommand::new(
                    &self.project_root,
                    &self.cache_root,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Exit(args) => {
                let cmd = super::exit::ExitCommand::new(
                    &self.project_root,
                    &self.cache_root,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Destroy(args) => {
                let cmd = super::destroy::DestroyCommand::new(
                    &self.project_root,
                    &self.cache_root,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(
                    &self.project_root,
                    &self.cache_root,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
