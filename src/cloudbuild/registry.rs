//! # Command Registry
//!
//! The catalog of every command the tool knows, built once at startup and read-only after.
//!
//! Besides the name → [`Command`] map the registry carries a hand-curated display order used
//! for help output. The order and the catalog must describe the same set of names; the
//! constructor checks this and refuses to build a registry that disagrees, so a mismatch
//! surfaces before any command runs rather than on first lookup.

use crate::commands::{self, Action};
use crate::error::{CloudBuildError, Result};
use crate::flags::FlagSchema;
use std::collections::{HashMap, HashSet};

/// Display order for help and listings.
pub const COMMAND_ORDER: [&str; 5] = [
    commands::get::NAME,
    commands::list::NAME,
    commands::update::NAME,
    commands::upload::NAME,
    commands::delete::NAME,
];

#[derive(Clone)]
pub struct Command {
    pub name: &'static str,
    pub help: &'static str,
    pub schema: FlagSchema,
    pub action: Action,
}

impl Command {
    pub fn new(
        name: &'static str,
        help: &'static str,
        schema: FlagSchema,
        action: Action,
    ) -> Self {
        Self {
            name,
            help,
            schema,
            action,
        }
    }

    pub fn render_help(&self) -> String {
        self.schema.render_help(self.help)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Registry {
    commands: HashMap<&'static str, Command>,
    order: Vec<&'static str>,
}

impl Registry {
    /// Build a registry, checking that `order` and `commands` name the same set.
    pub fn new(commands: Vec<Command>, order: &[&'static str]) -> Result<Self> {
        let mut catalog = HashMap::with_capacity(commands.len());
        for command in commands {
            if command.schema.command_name() != command.name {
                return Err(CloudBuildError::Registry(format!(
                    "command {} carries the flag schema of {}",
                    command.name,
                    command.schema.command_name()
                )));
            }
            let name = command.name;
            if catalog.insert(name, command).is_some() {
                return Err(CloudBuildError::Registry(format!(
                    "command {} is registered twice",
                    name
                )));
            }
        }

        let mut seen = HashSet::with_capacity(order.len());
        for name in order {
            if !seen.insert(*name) {
                return Err(CloudBuildError::Registry(format!(
                    "command {} appears twice in the display order",
                    name
                )));
            }
            if !catalog.contains_key(name) {
                return Err(CloudBuildError::Registry(format!(
                    "display order names unknown command {}",
                    name
                )));
            }
        }

        let mut unlisted: Vec<_> = catalog.keys().filter(|n| !seen.contains(*n)).collect();
        if !unlisted.is_empty() {
            unlisted.sort();
            return Err(CloudBuildError::Registry(format!(
                "commands missing from the display order: {}",
                unlisted
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(Self {
            commands: catalog,
            order: order.to_vec(),
        })
    }

    /// The built-in iOS credential commands.
    pub fn builtin() -> Result<Self> {
        Self::new(
            vec![
                commands::get::command(),
                commands::list::command(),
                commands::update::command(),
                commands::upload::command(),
                commands::delete::command(),
            ],
            &COMMAND_ORDER,
        )
    }

    pub fn lookup(&self, name: &str) -> Result<&Command> {
        self.commands
            .get(name)
            .ok_or_else(|| CloudBuildError::CommandNotFound(name.to_string()))
    }

    pub fn schema(&self, name: &str) -> Result<&FlagSchema> {
        self.lookup(name).map(|c| &c.schema)
    }

    pub fn ordered_names(&self) -> &[&'static str] {
        &self.order
    }

    pub fn ordered(&self) -> impl Iterator<Item = &Command> {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }

    pub fn help_for(&self, name: &str) -> Result<String> {
        self.lookup(name).map(Command::render_help)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
