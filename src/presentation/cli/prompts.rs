//! Interactive prompts using dialoguer

use crate::application::Prompter;
use crate::core::{AppError, ErrorCode, Result};
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Prompter reading from the terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::runtime(ErrorCode::Os(libc::EIO), format!("prompt failed: {}", err))
}

impl Prompter for TerminalPrompter {
    fn password(&mut self, security_enabled: bool) -> Result<String> {
        let article = if security_enabled { "the" } else { "a" };
        Password::with_theme(&self.theme)
            .with_prompt(format!(
                "Enter {} drive password (will be reset after erase)",
                article
            ))
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, challenge: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Enter the following to confirm erase - '{}'", challenge))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}
