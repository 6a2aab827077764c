//! Destroy command implementation.
//!
//! `kwenv destroy <name>` deletes an environment and its cache directory
//! after confirmation. Destroying the active environment exits it first, so
//! the project is left with plain config files rather than dangling links.

use std::path::{Path, PathBuf};

use crate::cli::args::DestroyArgs;
use crate::environment::{CacheStore, EnvManager, ProjectLayout};
use crate::error::{KwenvError, Result};
use crate::ui::{Confirmation, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The destroy command implementation.
pub struct DestroyCommand {
    project_root: PathBuf,
    cache_root: PathBuf,
    args: DestroyArgs,
}

impl DestroyCommand {
    /// Create a new destroy command.
    pub fn new(project_root: &Path, cache_root: &Path, args: DestroyArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            cache_root: cache_root.to_path_buf(),
            args,
        }
    }

    fn manager(&self) -> EnvManager {
        EnvManager::new(
            ProjectLayout::new(&self.project_root),
            CacheStore::new(&self.cache_root),
        )
    }
}

impl Command for DestroyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.manager();

        // Precondition checks run before the prompt; a declined run must not
        // have mutated anything.
        if !manager.layout().exists() {
            return super::fail_usage(
                KwenvError::UninitializedProject {
                    path: manager.layout().root().to_path_buf(),
                },
                ui,
            );
        }
        if !manager.layout().env_exists(&self.args.name) {
            return super::fail_usage(
                KwenvError::NotFound {
                    name: self.args.name.clone(),
                },
                ui,
            );
        }

        if !self.args.yes {
            let confirmation = Confirmation::new(
                "destroy_env",
                format!(
                    "Permanently delete environment '{}' and its cached kernel config?",
                    self.args.name
                ),
            );
            if !ui.confirm(&confirmation)? {
                ui.message("Aborted.");
                return Ok(CommandResult::invalid_argument());
            }
        }

        match manager.destroy(&self.args.name) {
            Ok(outcome) => {
                if outcome.was_active {
                    ui.message("Environment was active; plain config files were restored first.");
                }
                ui.success(&format!("Environment '{}' destroyed", self.args.name));
                Ok(CommandResult::success())
            }
            Err(e) => super::fail_usage(e, ui),
        }
    }
}
