//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined confirmation answers.
//!
//! # Example
//!
//! ```
//! use kwenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_confirm_response("destroy_env", true);
//!
//! // Use ui in code under test...
//! ui.message("Destroying environment");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Destroying"));
//! assert!(ui.has_success("Done!"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{Confirmation, OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured confirmation
/// answers, keyed by the confirmation's key.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    confirm_responses: HashMap<String, bool>,
    confirmations_shown: Vec<String>,
    /// Fallback answer for any confirmation key not in `confirm_responses`.
    default_confirm_response: Option<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the answer for a confirmation key.
    pub fn set_confirm_response(&mut self, key: &str, answer: bool) {
        self.confirm_responses.insert(key.to_string(), answer);
    }

    /// Set a fallback answer for any confirmation key not explicitly
    /// configured.
    pub fn set_default_confirm_response(&mut self, answer: bool) {
        self.default_confirm_response = Some(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all confirmations that were shown (by key).
    pub fn confirmations_shown(&self) -> &[String] {
        &self.confirmations_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.hints.clear();
        self.confirmations_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool> {
        self.confirmations_shown.push(confirmation.key.clone());

        if let Some(&answer) = self.confirm_responses.get(&confirmation.key) {
            return Ok(answer);
        }
        if let Some(answer) = self.default_confirm_response {
            return Ok(answer);
        }
        Ok(confirmation.default)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.show_hint("Try again");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.hints(), &["Try again"]);
    }

    #[test]
    fn mock_ui_confirm_with_response() {
        let mut ui = MockUI::new();
        ui.set_confirm_response("destroy_env", true);

        let confirmation = Confirmation::new("destroy_env", "Delete?");
        assert!(ui.confirm(&confirmation).unwrap());
        assert_eq!(ui.confirmations_shown(), &["destroy_env"]);
    }

    #[test]
    fn mock_ui_confirm_falls_back_to_default_response() {
        let mut ui = MockUI::new();
        ui.set_default_confirm_response(true);

        let confirmation = Confirmation::new("exit_env", "Leave?");
        assert!(ui.confirm(&confirmation).unwrap());
    }

    #[test]
    fn mock_ui_confirm_uses_confirmation_default_last() {
        let mut ui = MockUI::new();

        let declined = Confirmation::new("exit_env", "Leave?");
        assert!(!ui.confirm(&declined).unwrap());

        let accepted = Confirmation::new("exit_env", "Leave?").with_default(true);
        assert!(ui.confirm(&accepted).unwrap());
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();

        ui.message("Switching environment");
        ui.success("Complete!");
        ui.error("Failed to link");

        assert!(ui.has_message("Switching"));
        assert!(ui.has_success("Complete"));
        assert!(ui.has_error("Failed"));
        assert!(!ui.has_message("not there"));
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();

        ui.message("test");
        ui.success("done");
        ui.confirm(&Confirmation::new("k", "q")).unwrap();
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
        assert!(ui.confirmations_shown().is_empty());
    }

    #[test]
    fn mock_ui_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn mock_ui_is_not_interactive_by_default() {
        let ui = MockUI::new();
        assert!(!ui.is_interactive());
    }

    #[test]
    fn mock_ui_set_interactive() {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
