//! On-disk layout of a kwenv project.
//!
//! A project keeps its managed configuration in a `.kw` directory at the
//! project root:
//!
//! ```text
//! .kw/
//!   build.config        # plain file, or a symlink while an environment is active
//!   deploy.config
//!   ...
//!   env.current         # single line: active environment name (absent = none)
//!   environments/
//!     <name>/           # one full copy of the config set per environment
//! ```
//!
//! [`ProjectLayout`] only computes paths and answers simple questions about
//! them; lifecycle transitions live in [`crate::environment::manager`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

/// Logical names of the config files the environment manager tracks.
pub const MANAGED_CONFIGS: [&str; 7] = [
    "build",
    "deploy",
    "kworkflow",
    "mail",
    "notification",
    "remote",
    "vm",
];

/// Directory holding all managed configuration, relative to the project root.
pub const CONFIG_DIR: &str = ".kw";

/// Subdirectory of [`CONFIG_DIR`] holding one directory per environment.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// Pointer file recording the active environment name.
pub const CURRENT_FILE: &str = "env.current";

/// Path helpers for a single project checkout.
///
/// The root is injected rather than read from ambient process state, so the
/// layout can be pointed at a temporary directory in tests. Callers pass an
/// absolute root; symlink targets are derived from it.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.kw` config directory.
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// Root slot for a managed config, e.g. `.kw/build.config`.
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_dir().join(format!("{name}.config"))
    }

    /// Directory holding all environments.
    pub fn environments_dir(&self) -> PathBuf {
        self.config_dir().join(ENVIRONMENTS_DIR)
    }

    /// Directory of one named environment.
    pub fn env_dir(&self, env: &str) -> PathBuf {
        self.environments_dir().join(env)
    }

    /// An environment's copy of a managed config.
    pub fn env_config_file(&self, env: &str, name: &str) -> PathBuf {
        self.env_dir(env).join(format!("{name}.config"))
    }

    /// The active-environment pointer file.
    pub fn current_file(&self) -> PathBuf {
        self.config_dir().join(CURRENT_FILE)
    }

    /// Whether the `.kw` directory exists at all.
    pub fn exists(&self) -> bool {
        self.config_dir().is_dir()
    }

    /// Whether the project is initialized: `.kw` present with at least the
    /// build and deploy configs.
    pub fn is_initialized(&self) -> bool {
        self.exists()
            && self.config_file("build").exists()
            && self.config_file("deploy").exists()
    }

    /// Whether a named environment exists.
    pub fn env_exists(&self, env: &str) -> bool {
        self.env_dir(env).is_dir()
    }

    /// Read the active environment name, if any.
    ///
    /// An absent pointer file means no environment is active. The stored name
    /// is not checked against the environment listing here.
    pub fn current_env(&self) -> Result<Option<String>> {
        let path = self.current_file();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = raw.trim();
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name.to_string()))
        }
    }

    /// Record `env` as the active environment.
    pub fn write_current(&self, env: &str) -> Result<()> {
        let path = self.current_file();
        fs::write(&path, format!("{env}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Remove the active-environment pointer, if present.
    pub fn clear_current(&self) -> Result<()> {
        let path = self.current_file();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }

    /// Immediate subdirectory names under `environments/`, sorted.
    ///
    /// An absent `environments/` directory is an empty listing, not an error.
    pub fn list_environments(&self) -> Result<Vec<String>> {
        let dir = self.environments_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in
            fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))?
        {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
