//! Use command implementation.
//!
//! `kwenv use <name>` redirects every managed config slot at the project root
//! to the named environment via symlinks and records it in `env.current`.

use std::path::{Path, PathBuf};

use crate::cli::args::UseArgs;
use crate::environment::{CacheStore, EnvManager, ProjectLayout};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The use command implementation.
pub struct UseCommand {
    project_root: PathBuf,
    cache_root: PathBuf,
    args: UseArgs,
}

impl UseCommand {
    /// Create a new use command.
    pub fn new(project_root: &Path, cache_root: &Path, args: UseArgs) -> Self {
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

impl Command for UseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.manager().activate(&self.args.name) {
            Ok(()) => {
                ui.success(&format!("Now using environment '{}'", self.args.name));
                Ok(CommandResult::success())
            }
            Err(e) => super::fail_usage(e, ui),
        }
    }
}
