//! Interactive confirmation prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{KwenvError, Result};

use super::Confirmation;

/// Convert dialoguer errors to KwenvError.
fn map_dialoguer_err(e: dialoguer::Error) -> KwenvError {
    KwenvError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask the operator a yes/no question on the given terminal.
pub fn confirm_user(confirmation: &Confirmation, term: &Term) -> Result<bool> {
    let answer = Confirm::with_theme(&prompt_theme())
        .with_prompt(&confirmation.question)
        .default(confirmation.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(answer)
}
