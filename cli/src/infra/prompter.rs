//! Interactive prompts — implements the `Prompter` port with `dialoguer`.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::application::ports::Prompter;
use crate::domain::PromptError;

/// Prompts on stderr using the colorful dialoguer theme.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str, default: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }

    fn select(
        &self,
        message: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(PromptError::Interrupted)
    }
}

/// Ctrl-C surfaces from `console` as an `Interrupted` I/O error.
fn prompt_error(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            PromptError::Interrupted
        }
        dialoguer::Error::IO(e) => PromptError::Io(e),
        #[allow(unreachable_patterns)]
        other => PromptError::Io(io::Error::other(other.to_string())),
    }
}
