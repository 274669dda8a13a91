//! # Flag Schemas
//!
//! Every command declares the flags it recognizes through a [`FlagSchema`]. A schema is
//! pure declaration: an ordered list of `(name, default, help)` entries. Parsing is delegated
//! to clap's builder API, which turns the schema into a `clap::Command` on demand.
//!
//! Parsing produces [`ResolvedFlags`], a name → value map holding **only** the flags that
//! were supplied (or that carry a non-empty default). Absence is meaningful: the argument
//! resolver turns every absent field into an interactive question.

use crate::error::{CloudBuildError, Result};
use clap::{Arg, ArgAction};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
    pub name: String,
    pub default: String,
    pub help: String,
}

/// Ordered set of flag definitions for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSchema {
    command: String,
    flags: Vec<FlagDef>,
}

impl FlagSchema {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            flags: Vec::new(),
        }
    }

    /// Declare a flag. Redeclaring a name replaces the earlier definition in place.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        help: impl Into<String>,
    ) -> &mut Self {
        let def = FlagDef {
            name: name.into(),
            default: default.into(),
            help: help.into(),
        };
        match self.flags.iter_mut().find(|f| f.name == def.name) {
            Some(existing) => *existing = def,
            None => self.flags.push(def),
        }
        self
    }

    /// Builder form of [`FlagSchema::declare`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        self.declare(name, default, help);
        self
    }

    pub fn command_name(&self) -> &str {
        &self.command
    }

    pub fn flags(&self) -> &[FlagDef] {
        &self.flags
    }

    pub fn get(&self, name: &str) -> Option<&FlagDef> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Builds the clap command used for parsing and help rendering.
    pub fn to_clap(&self, about: &str) -> clap::Command {
        let mut cmd = clap::Command::new(self.command.clone())
            .about(about.to_string())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true);

        for flag in &self.flags {
            let mut arg = Arg::new(flag.name.clone())
                .long(flag.name.clone())
                .help(flag.help.clone())
                .value_name("VALUE")
                .action(ArgAction::Set);
            if !flag.default.is_empty() {
                arg = arg.default_value(flag.default.clone());
            }
            cmd = cmd.arg(arg);
        }

        cmd
    }

    pub fn render_help(&self, about: &str) -> String {
        self.to_clap(about).render_help().to_string()
    }

    /// Parse `--name=value` / `--name value` arguments against this schema.
    pub fn parse<I, T>(&self, args: I) -> Result<ResolvedFlags>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let matches = self
            .to_clap("")
            .try_get_matches_from(args)
            .map_err(|e| CloudBuildError::Flags(e.to_string().trim_end().to_string()))?;

        let mut resolved = ResolvedFlags::default();
        for flag in &self.flags {
            if let Some(value) = matches.get_one::<String>(&flag.name) {
                resolved.insert(flag.name.clone(), value.clone());
            }
        }
        Ok(resolved)
    }
}

/// Flags supplied for one invocation, keyed by flag name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFlags {
    values: BTreeMap<String, String>,
}

impl ResolvedFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResolvedFlags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut flags = ResolvedFlags::new();
        for (k, v) in iter {
            flags.insert(k, v);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlagSchema {
        FlagSchema::new("getCred")
            .with("projectId", "", "Project Id")
            .with("credId", "", "Credential Id")
    }

    #[test]
    fn declare_keeps_order() {
        let schema = sample();
        let names: Vec<_> = schema.flags().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["projectId", "credId"]);
    }

    #[test]
    fn redeclare_overwrites_in_place() {
        let mut schema = sample();
        schema.declare("projectId", "p-1", "Overridden");

        assert_eq!(schema.flags().len(), 2);
        assert_eq!(schema.flags()[0].help, "Overridden");
        assert_eq!(schema.flags()[0].default, "p-1");
    }

    #[test]
    fn empty_schema_is_legal() {
        let schema = FlagSchema::new("noop");
        let flags = schema.parse(Vec::<String>::new()).unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn parses_equals_and_space_forms() {
        let flags = sample()
            .parse(["--projectId=proj-123", "--credId", "c-9"])
            .unwrap();
        assert_eq!(flags.get("projectId"), Some("proj-123"));
        assert_eq!(flags.get("credId"), Some("c-9"));
    }

    #[test]
    fn omitted_flags_are_absent() {
        let flags = sample().parse(["--projectId=proj-123"]).unwrap();
        assert!(flags.contains("projectId"));
        assert!(!flags.contains("credId"));
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn non_empty_default_is_present() {
        let schema = sample().with("label", "default-label", "Label");
        let flags = schema.parse(Vec::<String>::new()).unwrap();
        assert_eq!(flags.get("label"), Some("default-label"));
        assert!(!flags.contains("projectId"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = sample().parse(["--bogus=1"]).unwrap_err();
        assert!(matches!(err, CloudBuildError::Flags(_)));
    }

    #[test]
    fn help_lists_declared_flags() {
        let help = sample().render_help("Get IOS Credential Details");
        assert!(help.contains("--projectId"));
        assert!(help.contains("Credential Id"));
        assert!(help.contains("Get IOS Credential Details"));
    }
}
