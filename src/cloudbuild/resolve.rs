//! # Argument Resolution
//!
//! Reconciles the flags supplied for an invocation against the fields a command needs.
//!
//! Each command describes its parameters as a static list of [`Field`]s. A field has a
//! Rust-side name and, optionally, the external name it goes by in the flag/prompt
//! namespace (`projectId`, `certPass`, ...). Without an external name the field's own name
//! is used.
//!
//! Resolution is purely name-based:
//!
//! - fields whose lookup name is a supplied, non-blank flag are copied verbatim (no
//!   lowercasing)
//! - a blank flag value (`--projectId=`) counts as not supplied, so the field is asked for
//! - every other field becomes a [`Question`] and the whole set is asked as one batch
//!   through [`ask_all`], which validates, re-asks and lowercases
//!
//! Commands turn the resulting [`ParamRecord`] into their own typed struct through the
//! [`Params`] trait, so adding a command never touches this module.

use crate::error::Result;
use crate::flags::ResolvedFlags;
use crate::prompt::{ask_all, Prompter, Question};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub lookup: Option<&'static str>,
}

impl Field {
    pub const fn new(name: &'static str) -> Self {
        Self { name, lookup: None }
    }

    pub const fn tagged(name: &'static str, lookup: &'static str) -> Self {
        Self {
            name,
            lookup: Some(lookup),
        }
    }

    pub fn lookup_name(&self) -> &'static str {
        self.lookup.unwrap_or(self.name)
    }
}

/// Resolved values, in field declaration order, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamRecord {
    values: Vec<(&'static str, String)>,
}

impl ParamRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Move a value out of the record. Missing fields yield an empty string.
    pub fn take(&mut self, name: &str) -> String {
        self.values
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| std::mem::take(v))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, name: &'static str, value: String) {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }
}

/// A typed parameter set that can be filled by [`resolve`].
pub trait Params: Sized {
    const FIELDS: &'static [Field];

    fn from_record(record: ParamRecord) -> Self;
}

/// Fill `fields` from `flags`, asking `prompter` for whatever is missing.
pub fn resolve_fields<P: Prompter + ?Sized>(
    fields: &[Field],
    flags: &ResolvedFlags,
    prompter: &mut P,
) -> Result<ParamRecord> {
    let mut record = ParamRecord::default();
    let mut questions = Vec::new();
    let mut pending = Vec::new();

    for field in fields {
        let lookup = field.lookup_name();
        match flags.get(lookup).filter(|v| !v.trim().is_empty()) {
            Some(value) => {
                debug!(field = lookup, "filled from flag");
                record.set(field.name, value.to_string());
            }
            None => {
                record.set(field.name, String::new());
                questions.push(Question::required(lookup));
                pending.push(field);
            }
        }
    }

    if questions.is_empty() {
        return Ok(record);
    }

    debug!(count = questions.len(), "asking for missing fields");
    let mut answers = ask_all(prompter, &questions)?;
    for field in pending {
        let answer = answers.remove(field.lookup_name()).unwrap_or_default();
        record.set(field.name, answer);
    }

    Ok(record)
}

pub fn resolve<T: Params, P: Prompter + ?Sized>(
    flags: &ResolvedFlags,
    prompter: &mut P,
) -> Result<T> {
    resolve_fields(T::FIELDS, flags, prompter).map(T::from_record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudBuildError;
    use crate::prompt::scripted::ScriptedPrompter;

    #[derive(Debug, PartialEq)]
    struct Sample {
        project_id: String,
        label: String,
        note: String,
    }

    impl Params for Sample {
        const FIELDS: &'static [Field] = &[
            Field::tagged("project_id", "projectId"),
            Field::tagged("label", "label"),
            Field::new("note"),
        ];

        fn from_record(mut record: ParamRecord) -> Self {
            Self {
                project_id: record.take("project_id"),
                label: record.take("label"),
                note: record.take("note"),
            }
        }
    }

    #[test]
    fn lookup_falls_back_to_field_name() {
        assert_eq!(Field::new("note").lookup_name(), "note");
        assert_eq!(Field::tagged("project_id", "projectId").lookup_name(), "projectId");
    }

    #[test]
    fn all_flags_present_asks_nothing() {
        let flags: ResolvedFlags = [("projectId", "Proj-A"), ("label", "MiXeD"), ("note", "N")]
            .into_iter()
            .collect();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        let sample: Sample = resolve(&flags, &mut prompter).unwrap();

        assert!(prompter.asked().is_empty());
        assert_eq!(
            sample,
            Sample {
                project_id: "Proj-A".into(),
                label: "MiXeD".into(),
                note: "N".into(),
            }
        );
    }

    #[test]
    fn missing_fields_are_asked_in_declaration_order() {
        let flags: ResolvedFlags = [("label", "L")].into_iter().collect();
        let mut prompter = ScriptedPrompter::new(["PROJ", "Note"]);

        let sample: Sample = resolve(&flags, &mut prompter).unwrap();

        assert_eq!(prompter.asked(), &["projectId", "note"]);
        assert_eq!(sample.project_id, "proj");
        assert_eq!(sample.label, "L");
        assert_eq!(sample.note, "note");
    }

    #[test]
    fn empty_answer_is_reasked_then_lowercased() {
        let flags: ResolvedFlags = [("projectId", "p"), ("note", "n")].into_iter().collect();
        let mut prompter = ScriptedPrompter::new(["", "ABC"]);

        let sample: Sample = resolve(&flags, &mut prompter).unwrap();

        assert_eq!(prompter.asked(), &["label", "label"]);
        assert_eq!(sample.label, "abc");
    }

    #[test]
    fn blank_flag_value_is_asked_for() {
        let flags: ResolvedFlags = [("projectId", ""), ("label", "  "), ("note", "n")]
            .into_iter()
            .collect();
        let mut prompter = ScriptedPrompter::new(["Proj", "Lbl"]);

        let sample: Sample = resolve(&flags, &mut prompter).unwrap();

        assert_eq!(prompter.asked(), &["projectId", "label"]);
        assert_eq!(sample.project_id, "proj");
        assert_eq!(sample.label, "lbl");
        assert_eq!(sample.note, "n");
    }

    #[test]
    fn aborted_batch_is_surfaced() {
        let flags = ResolvedFlags::new();
        let mut prompter = ScriptedPrompter::new(["only-one"]);

        let err = resolve::<Sample, _>(&flags, &mut prompter).unwrap_err();

        assert!(matches!(err, CloudBuildError::InteractionAborted(_)));
    }

    #[test]
    fn unrelated_flags_are_ignored() {
        let flags: ResolvedFlags = [("projectId", "p"), ("label", "l"), ("note", "n"), ("x", "y")]
            .into_iter()
            .collect();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        let record = resolve_fields(Sample::FIELDS, &flags, &mut prompter).unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("project_id"), Some("p"));
        assert_eq!(record.get("x"), None);
    }
}
