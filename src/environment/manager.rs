//! Environment lifecycle operations.
//!
//! [`EnvManager`] owns the state machine over a project's `.kw` directory.
//! A project is either unmanaged (no `env.current`, plain config files) or
//! has an active environment (pointer file present, every managed root slot a
//! symlink into `environments/<name>/`). Every invocation re-derives state
//! from disk; nothing is cached in memory.
//!
//! Operations are not transactional across the managed config set: a crash
//! mid-switch leaves a mixed state that the next switch repairs, since
//! relinking is idempotent per file.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::environment::cache::{CacheSeed, CacheStore};
use crate::environment::layout::{ProjectLayout, MANAGED_CONFIGS};
use crate::environment::{defaults, name};
use crate::error::{KwenvError, Result};

/// Outcome of a successful create.
#[derive(Debug)]
pub struct CreateOutcome {
    /// Managed configs absent at the project root, seeded from the built-in
    /// defaults instead.
    pub defaulted: Vec<String>,
    /// How the cache artifact was seeded. `None` means no source was found
    /// and the artifact is missing; the directories created so far are left
    /// in place.
    pub cache_seed: Option<CacheSeed>,
}

/// Outcome of a successful destroy.
#[derive(Debug)]
pub struct DestroyOutcome {
    /// Whether the destroyed environment was active and was exited first.
    pub was_active: bool,
}

/// Listing of a project's environments.
#[derive(Debug, Serialize)]
pub struct EnvListing {
    /// Active environment, if any.
    pub current: Option<String>,
    /// All environment names, sorted.
    pub environments: Vec<String>,
}

/// Lifecycle operations over one project and its cache.
pub struct EnvManager {
    layout: ProjectLayout,
    cache: CacheStore,
}

impl EnvManager {
    /// Create a manager for the given project layout and cache store.
    pub fn new(layout: ProjectLayout, cache: CacheStore) -> Self {
        Self { layout, cache }
    }

    /// Get the project layout.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Get the cache store.
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Create environment `env` as a full copy of the current config set.
    ///
    /// Configs present at the project root are copied in (through the active
    /// symlinks, if any); missing ones are seeded from the built-in defaults.
    /// The paired cache directory is created and its artifact seeded from the
    /// best available source. Creating an environment does not activate it.
    pub fn create(&self, env: &str) -> Result<CreateOutcome> {
        name::validate(env)?;
        if !self.layout.is_initialized() {
            return Err(KwenvError::UninitializedProject {
                path: self.layout.root().to_path_buf(),
            });
        }
        if self.layout.env_exists(env) {
            return Err(KwenvError::AlreadyExists {
                name: env.to_string(),
            });
        }

        let env_dir = self.layout.env_dir(env);
        fs::create_dir_all(&env_dir)
            .with_context(|| format!("Failed to create {}", env_dir.display()))?;

        let mut defaulted = Vec::new();
        for cfg in MANAGED_CONFIGS {
            let src = self.layout.config_file(cfg);
            let dst = self.layout.env_config_file(env, cfg);
            if src.exists() {
                fs::copy(&src, &dst).with_context(|| {
                    format!("Failed to copy {} into environment '{env}'", src.display())
                })?;
            } else {
                defaults::write_default(cfg, &dst)?;
                defaulted.push(cfg.to_string());
            }
        }

        self.cache.create_env(env)?;
        let cache_seed = self.cache.seed_artifact(env, self.layout.root())?;

        debug!(environment = env, "created environment");
        Ok(CreateOutcome {
            defaulted,
            cache_seed,
        })
    }

    /// Switch the project to environment `env`.
    ///
    /// Every managed root slot becomes a symlink into the environment's
    /// directory and `env.current` is rewritten. A plain (non-link) file
    /// occupying a slot is abandoned: switching never merges root content
    /// into an environment, so callers who care capture it beforehand.
    /// Re-running with the active environment is a no-op in effect, and
    /// switching directly between environments needs no exit in between.
    pub fn activate(&self, env: &str) -> Result<()> {
        if !self.layout.env_exists(env) {
            return Err(KwenvError::NotFound {
                name: env.to_string(),
            });
        }

        for cfg in MANAGED_CONFIGS {
            let slot = self.layout.config_file(cfg);
            if let Ok(meta) = fs::symlink_metadata(&slot) {
                if !meta.file_type().is_symlink() {
                    debug!(config = cfg, "abandoning plain config file at root slot");
                }
                fs::remove_file(&slot)
                    .with_context(|| format!("Failed to clear config slot {}", slot.display()))?;
            }
            let target = self.layout.env_config_file(env, cfg);
            make_symlink(&target, &slot)?;
        }

        self.layout.write_current(env)?;
        debug!(environment = env, "switched active environment");
        Ok(())
    }

    /// Leave the active environment.
    ///
    /// Each managed symlink is removed and replaced by a plain copy of the
    /// active environment's file, then `env.current` is deleted, so the
    /// project keeps usable config files after leaving.
    pub fn deactivate(&self) -> Result<String> {
        let current = self
            .layout
            .current_env()?
            .ok_or(KwenvError::NoActiveEnvironment)?;

        for cfg in MANAGED_CONFIGS {
            let slot = self.layout.config_file(cfg);
            if let Ok(meta) = fs::symlink_metadata(&slot) {
                if meta.file_type().is_symlink() {
                    fs::remove_file(&slot).with_context(|| {
                        format!("Failed to remove config link {}", slot.display())
                    })?;
                }
            }
            let src = self.layout.env_config_file(&current, cfg);
            if src.exists() {
                fs::copy(&src, &slot).with_context(|| {
                    format!(
                        "Failed to restore {}.config from environment '{current}'",
                        cfg
                    )
                })?;
            }
        }

        self.layout.clear_current()?;
        debug!(environment = %current, "left environment");
        Ok(current)
    }

    /// Delete environment `env` and its cache directory.
    ///
    /// Destroying the active environment exits it first, so the project is
    /// left with plain config files rather than dangling links. Irreversible.
    pub fn destroy(&self, env: &str) -> Result<DestroyOutcome> {
        if !self.layout.exists() {
            return Err(KwenvError::UninitializedProject {
                path: self.layout.root().to_path_buf(),
            });
        }
        if !self.layout.env_exists(env) {
            return Err(KwenvError::NotFound {
                name: env.to_string(),
            });
        }

        let was_active = self.layout.current_env()?.as_deref() == Some(env);
        if was_active {
            self.deactivate()?;
        }

        let env_dir = self.layout.env_dir(env);
        fs::remove_dir_all(&env_dir)
            .with_context(|| format!("Failed to remove {}", env_dir.display()))?;
        self.cache.remove_env(env)?;

        debug!(environment = env, "destroyed environment");
        Ok(DestroyOutcome { was_active })
    }

    /// Current environment and available names.
    ///
    /// The pointer is reported as stored; it is not re-validated against the
    /// directory listing.
    pub fn status(&self) -> Result<EnvListing> {
        if !self.layout.exists() {
            return Err(KwenvError::UninitializedProject {
                path: self.layout.root().to_path_buf(),
            });
        }
        Ok(EnvListing {
            current: self.layout.current_env()?,
            environments: self.layout.list_environments()?,
        })
    }
}

/// Force a symbolic link at `slot` pointing at `target`.
fn make_symlink(target: &Path, slot: &Path) -> Result<()> {
    #[cfg(unix)]
    std::os::unix::fs::symlink(target, slot).with_context(|| {
        format!(
            "Failed to link {} -> {}",
            slot.display(),
            target.display()
        )
    })?;
    #[cfg(windows)]
    std::os::windows::fs::symlink_file(target, slot).with_context(|| {
        format!(
            "Failed to link {} -> {}",
            slot.display(),
            target.display()
        )
    })?;
    #[cfg(not(any(unix, windows)))]
    return Err(KwenvError::Other(anyhow::anyhow!(
        "symbolic links are not supported on this platform"
    )));
    #[cfg(any(unix, windows))]
    Ok(())
}
