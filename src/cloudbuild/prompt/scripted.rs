use super::{Prompter, Question};
use crate::error::{CloudBuildError, Result, ValidationError};
use std::collections::VecDeque;

/// Replays a fixed queue of answers. Running out of answers behaves like the operator
/// closing the terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
    rejected: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Names of every question asked, repeats included.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        self.asked.push(question.name.clone());
        self.answers.pop_front().ok_or_else(|| {
            CloudBuildError::InteractionAborted(format!("no answer for {}", question.name))
        })
    }

    fn reject(&mut self, question: &Question, _reason: &ValidationError) {
        self.rejected.push(question.name.clone());
    }
}
