//! Built-in default config templates embedded at compile time.
//!
//! When an environment is created and the project root lacks one of the
//! managed configs, the copy is seeded from these templates instead.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use include_dir::{include_dir, Dir};

use crate::error::Result;

/// Embedded default templates, one `<name>.config` per managed config.
static DEFAULTS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/defaults");

/// Get the default template content for a managed config name.
pub fn default_config(name: &str) -> Option<&'static str> {
    DEFAULTS_DIR
        .get_file(format!("{name}.config"))?
        .contents_utf8()
}

/// Write the default template for `name` to `dest`.
pub fn write_default(name: &str, dest: &Path) -> Result<()> {
    let content = default_config(name)
        .ok_or_else(|| anyhow!("no built-in default for '{name}.config'"))?;
    fs::write(dest, content)
        .with_context(|| format!("Failed to write default {name}.config to {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::layout::MANAGED_CONFIGS;
    use tempfile::TempDir;

    #[test]
    fn every_managed_config_has_a_default() {
        for name in MANAGED_CONFIGS {
            let content = default_config(name);
            assert!(content.is_some(), "missing default for {name}.config");
            assert!(!content.unwrap().is_empty());
        }
    }

    #[test]
    fn unknown_config_has_no_default() {
        assert!(default_config("nonexistent").is_none());
    }

    #[test]
    fn write_default_creates_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("build.config");

        write_default("build", &dest).unwrap();

        let written = fs::read_to_string(&dest).unwrap();
        assert_eq!(Some(written.as_str()), default_config("build"));
    }

    #[test]
    fn write_default_fails_for_unknown_name() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("bogus.config");

        assert!(write_default("bogus", &dest).is_err());
        assert!(!dest.exists());
    }
}
