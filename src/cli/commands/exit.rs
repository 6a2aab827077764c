//! Exit command implementation.
//!
//! `kwenv exit` leaves the active environment after confirmation,
//! materializing its config files as plain files at the project root.

use std::path::{Path, PathBuf};

use crate::cli::args::ExitArgs;
use crate::environment::{CacheStore, EnvManager, ProjectLayout};
use crate::error::Result;
use crate::ui::{Confirmation, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The exit command implementation.
pub struct ExitCommand {
    project_root: PathBuf,
    cache_root: PathBuf,
    args: ExitArgs,
}

impl ExitCommand {
    /// Create a new exit command.
    pub fn new(project_root: &Path, cache_root: &Path, args: ExitArgs) -> Self {
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

impl Command for ExitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.manager();

        let Some(current) = manager.layout().current_env()? else {
            ui.message("No environment is active; nothing to exit.");
            return Ok(CommandResult::success());
        };

        if !self.args.yes {
            let confirmation = Confirmation::new(
                "exit_env",
                format!("Leave environment '{current}' and restore plain config files?"),
            );
            if !ui.confirm(&confirmation)? {
                ui.message("Aborted.");
                return Ok(CommandResult::invalid_argument());
            }
        }

        match manager.deactivate() {
            Ok(name) => {
                ui.success(&format!("Left environment '{name}'"));
                Ok(CommandResult::success())
            }
            Err(e) => super::fail_usage(e, ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{CreateArgs, UseArgs};
    use crate::environment::MANAGED_CONFIGS;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_active_env(name: &str) -> (TempDir, TempDir) {
        let project = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let kw_dir = project.path().join(".kw");
        fs::create_dir_all(&kw_dir).unwrap();
        fs::write(kw_dir.join("build.config"), "arch=x86_64\n").unwrap();
        fs::write(kw_dir.join("deploy.config"), "reboot_after_deploy=no\n").unwrap();
        fs::write(project.path().join(".config"), "CONFIG_SMP=y\n").unwrap();

        let mut ui = MockUI::new();
        super::super::create::CreateCommand::new(
            project.path(),
            cache.path(),
            CreateArgs {
                name: name.to_string(),
            },
        )
        .execute(&mut ui)
        .unwrap();
        super::super::use_env::UseCommand::new(
            project.path(),
            cache.path(),
            UseArgs {
                name: name.to_string(),
            },
        )
        .execute(&mut ui)
        .unwrap();

        (project, cache)
    }

    fn command(project: &TempDir, cache: &TempDir, yes: bool) -> ExitCommand {
        ExitCommand::new(project.path(), cache.path(), ExitArgs { yes })
    }

    #[test]
    fn exit_with_no_active_env_is_noop_success() {
        let project = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join(".kw")).unwrap();
        let mut ui = MockUI::new();

        let result = command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("nothing to exit"));
        assert!(ui.confirmations_shown().is_empty());
    }

    #[test]
    fn exit_confirmed_restores_plain_files() {
        let (project, cache) = setup_active_env("debug");
        let mut ui = MockUI::new();
        ui.set_confirm_response("exit_env", true);

        let result = command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Left environment 'debug'"));

        let kw_dir = project.path().join(".kw");
        assert!(!kw_dir.join("env.current").exists());
        for cfg in MANAGED_CONFIGS {
            let slot = kw_dir.join(format!("{cfg}.config"));
            assert!(slot.is_file());
            assert!(!slot.is_symlink(), "{cfg}.config should be a plain file");
        }
        assert_eq!(
            fs::read_to_string(kw_dir.join("build.config")).unwrap(),
            "arch=x86_64\n"
        );
    }

    #[test]
    fn exit_declined_changes_nothing() {
        let (project, cache) = setup_active_env("debug");
        let mut ui = MockUI::new();
        ui.set_confirm_response("exit_env", false);

        let result = command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 22);
        assert!(ui.has_message("Aborted"));

        let kw_dir = project.path().join(".kw");
        assert!(kw_dir.join("env.current").exists());
        assert!(kw_dir.join("build.config").is_symlink());
    }

    #[test]
    fn exit_with_yes_skips_confirmation() {
        let (project, cache) = setup_active_env("debug");
        let mut ui = MockUI::new();

        let result = command(&project, &cache, true).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.confirmations_shown().is_empty());
        assert!(!project.path().join(".kw/env.current").exists());
    }
}
