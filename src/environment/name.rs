//! Environment name validation.
//!
//! Names become directory names under `environments/`, so anything that could
//! confuse a shell or escape the directory is rejected before the filesystem
//! is touched.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{KwenvError, Result};

/// Characters that can never appear in an environment name: whitespace, a
/// set of shell specials, and path separators.
static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s!@#$%^&()+/\\]"#).expect("forbidden-character class"));

/// Validate a user-supplied environment name.
pub fn validate(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(KwenvError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if let Some(found) = FORBIDDEN.find(name) {
        let offending = found.as_str();
        let reason = if offending.chars().all(char::is_whitespace) {
            "whitespace is not allowed".to_string()
        } else {
            format!("character '{offending}' is not allowed")
        };
        return Err(KwenvError::InvalidName {
            name: name.to_string(),
            reason,
        });
    }
    Ok(())
}
