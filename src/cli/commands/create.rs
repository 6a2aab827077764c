//! Create command implementation.
//!
//! `kwenv create <name>` snapshots the project's current config set into a
//! new environment and seeds its cached kernel config artifact.

use std::path::{Path, PathBuf};

use crate::cli::args::CreateArgs;
use crate::environment::{CacheSeed, CacheStore, EnvManager, ProjectLayout};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    project_root: PathBuf,
    cache_root: PathBuf,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(project_root: &Path, cache_root: &Path, args: CreateArgs) -> Self {
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

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = match self.manager().create(&self.args.name) {
            Ok(outcome) => outcome,
            Err(e) => return super::fail_usage(e, ui),
        };

        for cfg in &outcome.defaulted {
            ui.message(&format!(
                "No {cfg}.config at the project root; seeded it from the built-in default"
            ));
        }

        match &outcome.cache_seed {
            Some(CacheSeed::Donor(donor)) => {
                ui.message(&format!(
                    "Cached kernel config inherited from environment '{donor}'"
                ));
            }
            Some(CacheSeed::ProjectConfig) => {
                ui.message("Cached kernel config adopted from the project's .config");
            }
            Some(CacheSeed::HostConfig(path)) => {
                ui.message(&format!("Cached kernel config seeded from {}", path.display()));
            }
            None => {
                ui.warning(&format!(
                    "Environment '{}' was created without a cached .config",
                    self.args.name
                ));
                return super::fail_usage(crate::error::KwenvError::NoKernelConfigSource, ui);
            }
        }

        ui.success(&format!("Environment '{}' created", self.args.name));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MANAGED_CONFIGS;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project() -> (TempDir, TempDir) {
        let project = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let kw_dir = project.path().join(".kw");
        fs::create_dir_all(&kw_dir).unwrap();
        fs::write(kw_dir.join("build.config"), "arch=x86_64\n").unwrap();
        fs::write(kw_dir.join("deploy.config"), "reboot_after_deploy=no\n").unwrap();
        fs::write(project.path().join(".config"), "CONFIG_SMP=y\n").unwrap();
        (project, cache)
    }

    fn command(project: &TempDir, cache: &TempDir, name: &str) -> CreateCommand {
        CreateCommand::new(
            project.path(),
            cache.path(),
            CreateArgs {
                name: name.to_string(),
            },
        )
    }

    #[test]
    fn create_reports_success_and_writes_configs() {
        let (project, cache) = setup_project();
        let cmd = command(&project, &cache, "debug");
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Environment 'debug' created"));
        assert!(ui.has_message("adopted from the project's .config"));

        let env_dir = project.path().join(".kw/environments/debug");
        for cfg in MANAGED_CONFIGS {
            assert!(env_dir.join(format!("{cfg}.config")).is_file());
        }
        assert!(cache
            .path()
            .join("environments/debug/.config")
            .is_file());
    }

    #[test]
    fn create_notes_configs_seeded_from_defaults() {
        let (project, cache) = setup_project();
        let cmd = command(&project, &cache, "debug");
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("No vm.config at the project root"));
        assert!(ui.has_message("No mail.config at the project root"));
        assert!(!ui.has_message("No build.config at the project root"));
    }

    #[test]
    fn create_duplicate_fails_with_invalid_argument() {
        let (project, cache) = setup_project();
        let mut ui = MockUI::new();

        command(&project, &cache, "debug").execute(&mut ui).unwrap();
        let result = command(&project, &cache, "debug").execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 22);
        assert!(ui.has_error("already exists"));
    }

    #[test]
    fn create_invalid_name_fails_without_mutation() {
        let (project, cache) = setup_project();
        let cmd = command(&project, &cache, "bad name");
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 22);
        assert!(ui.has_error("Invalid environment name"));
        assert!(!project.path().join(".kw/environments").exists());
    }

    #[test]
    fn create_uninitialized_project_fails() {
        let project = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let cmd = command(&project, &cache, "debug");
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 22);
        assert!(ui.has_error("not initialized"));
        assert!(ui.has_hint("build.config"));
    }
}
