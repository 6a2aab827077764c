//! Per-environment cache of the kernel build-configuration artifact.
//!
//! Kernel `.config` files are large generated artifacts, so they live under a
//! cache root outside the project tree: switching environments also switches
//! the artifact without duplicating it into version-controlled storage. The
//! cache mirrors the project layout with one directory per environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Context;
use tracing::debug;

use crate::environment::layout::ENVIRONMENTS_DIR;
use crate::error::Result;

/// File name of the cached kernel build-configuration artifact.
pub const CACHE_ARTIFACT: &str = ".config";

/// How a cache artifact was seeded at environment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheSeed {
    /// Copied from another environment's cached artifact.
    Donor(String),
    /// Adopted from a loose `.config` at the project root.
    ProjectConfig,
    /// Copied from the running host's kernel config.
    HostConfig(PathBuf),
}

/// Storage for per-environment cache directories.
///
/// The root is injected so tests can point the store at a temporary
/// directory; the host kernel-config fallback is injectable for the same
/// reason.
pub struct CacheStore {
    root: PathBuf,
    host_config: Option<PathBuf>,
}

impl CacheStore {
    /// Create a cache store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            host_config: host_kernel_config(),
        }
    }

    /// Replace the host kernel-config fallback (used by tests).
    pub fn with_host_config(mut self, host_config: Option<PathBuf>) -> Self {
        self.host_config = host_config;
        self
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache directory of one named environment.
    pub fn env_dir(&self, env: &str) -> PathBuf {
        self.root.join(ENVIRONMENTS_DIR).join(env)
    }

    /// Path of an environment's cached artifact.
    pub fn artifact_path(&self, env: &str) -> PathBuf {
        self.env_dir(env).join(CACHE_ARTIFACT)
    }

    /// Create the cache directory for `env`.
    pub fn create_env(&self, env: &str) -> Result<()> {
        let dir = self.env_dir(env);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
        Ok(())
    }

    /// Remove the cache directory for `env`, if present.
    pub fn remove_env(&self, env: &str) -> Result<()> {
        let dir = self.env_dir(env);
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to remove cache directory {}", dir.display()))?;
        }
        Ok(())
    }

    /// Seed the artifact for `env` from the best available source.
    ///
    /// Sources, in order: the most recently modified artifact among the other
    /// environments, a loose `.config` at the project root, the host kernel
    /// config. Returns `None` when no source exists; the cache directory is
    /// left in place either way.
    pub fn seed_artifact(&self, env: &str, project_root: &Path) -> Result<Option<CacheSeed>> {
        let dest = self.artifact_path(env);

        if let Some((donor, path)) = self.newest_donor(env)? {
            fs::copy(&path, &dest).with_context(|| {
                format!("Failed to copy cached config from environment '{donor}'")
            })?;
            debug!(donor = %donor, "seeded cache artifact from sibling environment");
            return Ok(Some(CacheSeed::Donor(donor)));
        }

        let loose = project_root.join(CACHE_ARTIFACT);
        if loose.is_file() {
            fs::copy(&loose, &dest)
                .with_context(|| format!("Failed to copy {}", loose.display()))?;
            debug!("seeded cache artifact from the project's loose .config");
            return Ok(Some(CacheSeed::ProjectConfig));
        }

        if let Some(host) = self.host_config.clone() {
            if host.is_file() {
                fs::copy(&host, &dest)
                    .with_context(|| format!("Failed to copy {}", host.display()))?;
                debug!(source = %host.display(), "seeded cache artifact from the host kernel config");
                return Ok(Some(CacheSeed::HostConfig(host)));
            }
        }

        Ok(None)
    }

    /// Most recently modified artifact among the other environments.
    fn newest_donor(&self, exclude: &str) -> Result<Option<(String, PathBuf)>> {
        let dir = self.root.join(ENVIRONMENTS_DIR);
        if !dir.is_dir() {
            return Ok(None);
        }
        let mut newest: Option<(SystemTime, String, PathBuf)> = None;
        for entry in
            fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))?
        {
            let entry = entry?;
            let name = match entry.file_name().to_str() {
                Some(n) => n.to_string(),
                None => continue,
            };
            if name == exclude {
                continue;
            }
            let candidate = entry.path().join(CACHE_ARTIFACT);
            let Ok(meta) = candidate.metadata() else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            if newest.as_ref().is_none_or(|(t, _, _)| modified > *t) {
                newest = Some((modified, name, candidate));
            }
        }
        Ok(newest.map(|(_, name, path)| (name, path)))
    }
}

/// Kernel config of the running host, matched to the booted release.
fn host_kernel_config() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let release = fs::read_to_string("/proc/sys/kernel/osrelease").ok()?;
        let candidate = PathBuf::from(format!("/boot/config-{}", release.trim()));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Default cache root for the current platform.
pub fn default_cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kwenv")
}
