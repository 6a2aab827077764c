//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! Destructive operations go through [`UserInterface::confirm`], so the
//! environment state machine never talks to a terminal directly and tests
//! can script the operator's answer.
//!
//! # Example
//!
//! ```
//! use kwenv::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Environment created");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::confirm_user;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, KwenvTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a contextual hint (remediation pointer under an error or listing).
    fn show_hint(&mut self, hint: &str);

    /// Ask the operator a yes/no question before a destructive step.
    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A yes/no confirmation to show to the user.
#[derive(Debug, Clone)]
pub struct Confirmation {
    /// Unique key for the confirmation (used for overrides/lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer assumed when the operator cannot be asked.
    pub default: bool,
}

impl Confirmation {
    /// Create a confirmation that defaults to "no".
    pub fn new(key: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default: false,
        }
    }

    /// Override the assumed answer.
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}
