//! List command implementation.
//!
//! `kwenv list` shows the active environment and every available one.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::environment::{CacheStore, EnvManager, ProjectLayout};
use crate::error::{KwenvError, Result};
use crate::ui::{KwenvTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    cache_root: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, cache_root: &Path, args: ListArgs) -> Self {
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

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.manager();
        let listing = match manager.status() {
            Ok(listing) => listing,
            Err(e) => return super::fail_usage(e, ui),
        };

        if self.args.json {
            let output = serde_json::to_string_pretty(&listing)
                .map_err(|e| KwenvError::Other(e.into()))?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        if listing.environments.is_empty() {
            ui.message("No environments yet.");
            ui.show_hint("Create one with 'kwenv create <name>'.");
            return Ok(CommandResult::success());
        }

        let theme = KwenvTheme::new();

        if let Some(ref current) = listing.current {
            ui.message(&format!(
                "{} {}",
                theme.key.apply_to("Current environment:"),
                theme.current.apply_to(current)
            ));
        }

        ui.message(&format!("{}", theme.key.apply_to("Available environments:")));
        for name in &listing.environments {
            let marker = if listing.current.as_deref() == Some(name.as_str()) {
                "*"
            } else {
                " "
            };
            ui.message(&format!("  {} {}", marker, theme.highlight.apply_to(name)));
            if ui.output_mode().is_verbose() {
                ui.message(&format!(
                    "      {}",
                    theme
                        .dim
                        .apply_to(format!("cache: {}", manager.cache().env_dir(name).display()))
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::CreateArgs;
    use crate::ui::{MockUI, OutputMode};
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

    fn create_env(project: &TempDir, cache: &TempDir, name: &str) {
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
    }

    fn command(project: &TempDir, cache: &TempDir, json: bool) -> ListCommand {
        ListCommand::new(project.path(), cache.path(), ListArgs { json })
    }

    #[test]
    fn list_without_project_fails() {
        let project = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 22);
        assert!(ui.has_error("not initialized"));
    }

    #[test]
    fn list_with_no_environments_reports_guidance() {
        let (project, cache) = setup_project();
        let mut ui = MockUI::new();

        let result = command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No environments yet"));
        assert!(ui.has_hint("kwenv create"));
    }

    #[test]
    fn list_shows_every_environment() {
        let (project, cache) = setup_project();
        create_env(&project, &cache, "debug");
        create_env(&project, &cache, "mainline");
        let mut ui = MockUI::new();

        let result = command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("debug"));
        assert!(ui.has_message("mainline"));
    }

    #[test]
    fn list_marks_the_current_environment() {
        let (project, cache) = setup_project();
        create_env(&project, &cache, "debug");
        fs::write(project.path().join(".kw/env.current"), "debug\n").unwrap();
        let mut ui = MockUI::new();

        command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(ui.has_message("Current environment:"));
        assert!(ui.has_message("* debug"));
    }

    #[test]
    fn list_json_is_machine_readable() {
        let (project, cache) = setup_project();
        create_env(&project, &cache, "debug");
        let mut ui = MockUI::new();

        let result = command(&project, &cache, true).execute(&mut ui).unwrap();

        assert!(result.success);
        let output = ui.messages().join("\n");
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["environments"][0], "debug");
        assert!(parsed["current"].is_null());
    }

    #[test]
    fn list_verbose_shows_cache_paths() {
        let (project, cache) = setup_project();
        create_env(&project, &cache, "debug");
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        command(&project, &cache, false).execute(&mut ui).unwrap();

        assert!(ui.has_message("cache:"));
    }
}
