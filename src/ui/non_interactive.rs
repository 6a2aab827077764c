//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::{Confirmation, OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Confirmations resolve through `KWENV_CONFIRM_<KEY>` environment variables
/// when present and otherwise fall back to the confirmation's default answer,
/// so headless callers never block on a prompt.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect KWENV_CONFIRM_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("KWENV_CONFIRM_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool> {
        let env_key = format!("KWENV_CONFIRM_{}", confirmation.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            let answer = matches!(value.to_lowercase().as_str(), "true" | "yes" | "y" | "1");
            return Ok(answer);
        }

        Ok(confirmation.default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_uses_env_override_yes() {
        let mut overrides = HashMap::new();
        overrides.insert("KWENV_CONFIRM_EXIT_ENV".to_string(), "yes".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let confirmation = Confirmation::new("exit_env", "Leave?");

        assert!(ui.confirm(&confirmation).unwrap());
    }

    #[test]
    fn confirm_uses_env_override_no() {
        let mut overrides = HashMap::new();
        overrides.insert("KWENV_CONFIRM_DESTROY_ENV".to_string(), "no".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let confirmation = Confirmation::new("destroy_env", "Delete?").with_default(true);

        assert!(!ui.confirm(&confirmation).unwrap());
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        let declined = Confirmation::new("destroy_env", "Delete?");
        assert!(!ui.confirm(&declined).unwrap());

        let accepted = Confirmation::new("exit_env", "Leave?").with_default(true);
        assert!(ui.confirm(&accepted).unwrap());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
