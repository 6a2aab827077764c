//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`kwenv create`, `kwenv use`)
//! - Shared project/cache root handling
//! - Consistent global flag handling

pub mod completions;
pub mod create;
pub mod destroy;
pub mod dispatcher;
pub mod exit;
pub mod list;
pub mod use_env;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_INVALID_ARG};

use crate::error::{KwenvError, Result};
use crate::ui::UserInterface;

/// Report a usage or precondition error with a remediation hint, or propagate
/// anything unexpected.
pub(crate) fn fail_usage(err: KwenvError, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    if !err.is_usage_error() {
        return Err(err);
    }
    ui.error(&err.to_string());
    if let Some(hint) = usage_hint(&err) {
        ui.show_hint(hint);
    }
    Ok(CommandResult::invalid_argument())
}

/// Remediation hint for a usage error.
fn usage_hint(err: &KwenvError) -> Option<&'static str> {
    match err {
        KwenvError::UninitializedProject { .. } => {
            Some("Set up .kw/ with build.config and deploy.config before managing environments.")
        }
        KwenvError::InvalidName { .. } => Some(
            "Environment names cannot contain whitespace, path separators, \
             or any of: ! @ # $ % ^ & ( ) +",
        ),
        KwenvError::AlreadyExists { .. } => {
            Some("Pick a different name, or destroy the existing environment first.")
        }
        KwenvError::NotFound { .. } => Some("Run 'kwenv list' to see the available environments."),
        KwenvError::NoKernelConfigSource => Some(
            "Place a .config at the project root, or create the environment on a machine \
             with a /boot/config-<release> file.",
        ),
        _ => None,
    }
}
