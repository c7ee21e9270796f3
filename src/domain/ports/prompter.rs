//! Prompter port - interactive questions asked by `sidekick launch`

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// Stdin is not a terminal, so nothing can be asked
    #[error("cannot prompt for {field}: not running in an interactive terminal")]
    NotInteractive { field: String },

    #[error("prompt failed: {0}")]
    Io(String),
}

pub trait Prompter {
    /// Ask for a single line of text
    ///
    /// `default` is offered to the user and returned on empty input. An empty
    /// answer with no default is returned as an empty string; callers decide
    /// whether that is acceptable.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError>;
}
