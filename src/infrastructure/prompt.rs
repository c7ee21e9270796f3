//! Terminal prompter
//!
//! Implements the Prompter port with dialoguer text inputs on stderr.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::ports::{PromptError, Prompter};

/// Prompter for an interactive terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    interactive: bool,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        if !self.interactive {
            return Err(PromptError::NotInteractive {
                field: prompt.to_string(),
            });
        }

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            input = input.default(default.to_string());
        }

        input
            .interact_text()
            .map_err(|e| PromptError::Io(e.to_string()))
    }
}
