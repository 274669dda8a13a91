//! # Interactive Prompting
//!
//! Fields that were not supplied as flags are filled by asking the operator. This module
//! defines the question type and the [`Prompter`] trait that performs the actual terminal
//! exchange, plus [`ask_all`], which runs a batch of questions to completion.
//!
//! The prompter only ever returns the **raw** answer. Validation and normalization happen in
//! [`ask_all`], so every implementation gets the same re-prompt behaviour:
//!
//! 1. ask the question
//! 2. run the validator; on rejection, notify the prompter and ask again
//! 3. trim surrounding whitespace, apply the transform and record the answer under the
//!    question's name
//!
//! The batch blocks until every question has an accepted answer. There is no timeout. A
//! prompter that cannot continue (closed stdin, Ctrl-C) returns
//! [`CloudBuildError::InteractionAborted`](crate::error::CloudBuildError::InteractionAborted),
//! which ends the batch immediately.
//!
//! ## Implementations
//!
//! - [`terminal::TerminalPrompter`]: dialoguer-backed, used by the binary
//! - [`scripted::ScriptedPrompter`]: replays canned answers, for tests

use crate::error::{Result, ValidationError};
use std::collections::HashMap;
use tracing::{debug, warn};

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted;
pub mod terminal;

/// Rule an answer must satisfy before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
}

impl Validator {
    pub fn check(&self, answer: &str) -> std::result::Result<(), ValidationError> {
        match self {
            Validator::Required if answer.trim().is_empty() => Err(ValidationError::Required),
            Validator::Required => Ok(()),
        }
    }
}

/// Normalization applied to an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    ToLower,
}

impl Transform {
    pub fn apply(&self, answer: String) -> String {
        match self {
            Transform::ToLower => answer.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub message: String,
    pub validate: Validator,
    pub transform: Transform,
}

impl Question {
    /// A required question whose message is its name and whose answer is lowercased.
    pub fn required(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            message: name.clone(),
            name,
            validate: Validator::Required,
            transform: Transform::ToLower,
        }
    }
}

/// Answers keyed by question name.
pub type Answers = HashMap<String, String>;

pub trait Prompter {
    /// Ask a single question and return the operator's raw answer.
    fn ask(&mut self, question: &Question) -> Result<String>;

    /// Called after an answer was rejected, before the question is asked again.
    fn reject(&mut self, _question: &Question, _reason: &ValidationError) {}
}

/// Ask every question in order, re-asking each until its answer validates.
pub fn ask_all<P: Prompter + ?Sized>(
    prompter: &mut P,
    questions: &[Question],
) -> Result<Answers> {
    let mut answers = Answers::with_capacity(questions.len());

    for question in questions {
        loop {
            let raw = prompter.ask(question)?;
            match question.validate.check(&raw) {
                Ok(()) => {
                    debug!(question = %question.name, "answer accepted");
                    let answer = question.transform.apply(raw.trim().to_string());
                    answers.insert(question.name.clone(), answer);
                    break;
                }
                Err(reason) => {
                    warn!(question = %question.name, %reason, "answer rejected");
                    prompter.reject(question, &reason);
                }
            }
        }
    }

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedPrompter;
    use super::*;
    use crate::error::CloudBuildError;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(Validator::Required.check(""), Err(ValidationError::Required));
        assert_eq!(Validator::Required.check("   "), Err(ValidationError::Required));
        assert!(Validator::Required.check("x").is_ok());
    }

    #[test]
    fn to_lower_normalizes() {
        assert_eq!(Transform::ToLower.apply("ABC".into()), "abc");
    }

    #[test]
    fn question_message_is_its_name() {
        let q = Question::required("projectId");
        assert_eq!(q.message, "projectId");
        assert_eq!(q.validate, Validator::Required);
        assert_eq!(q.transform, Transform::ToLower);
    }

    #[test]
    fn empty_answer_is_asked_again() {
        let mut prompter = ScriptedPrompter::new(["", "ABC"]);
        let answers = ask_all(&mut prompter, &[Question::required("label")]).unwrap();

        assert_eq!(answers["label"], "abc");
        assert_eq!(prompter.asked(), &["label", "label"]);
        assert_eq!(prompter.rejected(), &["label"]);
    }

    #[test]
    fn surrounding_whitespace_is_dropped() {
        let mut prompter = ScriptedPrompter::new(["  ABC \n"]);
        let answers = ask_all(&mut prompter, &[Question::required("label")]).unwrap();

        assert_eq!(answers["label"], "abc");
    }

    #[test]
    fn questions_are_asked_in_order() {
        let mut prompter = ScriptedPrompter::new(["KEY1", "ORG1"]);
        let questions = [Question::required("apiKey"), Question::required("orgId")];
        let answers = ask_all(&mut prompter, &questions).unwrap();

        assert_eq!(prompter.asked(), &["apiKey", "orgId"]);
        assert_eq!(answers["apiKey"], "key1");
        assert_eq!(answers["orgId"], "org1");
    }

    #[test]
    fn abort_ends_the_batch() {
        let mut prompter = ScriptedPrompter::new(["first"]);
        let questions = [Question::required("a"), Question::required("b")];
        let err = ask_all(&mut prompter, &questions).unwrap_err();

        assert!(matches!(err, CloudBuildError::InteractionAborted(_)));
    }

    #[test]
    fn empty_batch_asks_nothing() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let answers = ask_all(&mut prompter, &[]).unwrap();
        assert!(answers.is_empty());
        assert!(prompter.asked().is_empty());
    }
}
