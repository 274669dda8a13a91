use super::{Prompter, Question};
use crate::error::{CloudBuildError, Result, ValidationError};
use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Prompts on stderr so stdout stays reserved for command output.
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        if !self.term.is_term() {
            return Err(CloudBuildError::InteractionAborted(format!(
                "{} is required but stderr is not a terminal",
                question.name
            )));
        }
        // Empty answers must reach the validator, which owns the retry loop.
        Input::<String>::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(|e| CloudBuildError::InteractionAborted(e.to_string()))
    }

    fn reject(&mut self, question: &Question, reason: &ValidationError) {
        let line = format!("{}: {}", question.name, reason);
        let _ = self.term.write_line(&line.red().to_string());
    }
}
