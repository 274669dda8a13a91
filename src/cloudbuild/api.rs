//! # API Facade
//!
//! The single entry point for running a command, regardless of the UI driving it.
//!
//! `run(name, args)` performs the whole dispatch:
//!
//! 1. look the command up in the [`Registry`]
//! 2. parse `args` against the command's flag schema
//! 3. invoke the command's action, which resolves parameters (prompting if needed), builds a
//!    service client and performs one remote call
//!
//! The facade returns a [`CmdResult`] and never prints. Presentation, exit codes and help
//! rendering belong to the caller.
//!
//! ## Generic Over Collaborators
//!
//! `CredentialsApi<P, F>` is generic over the prompter and the service factory:
//! - Production: `CredentialsApi<TerminalPrompter, HttpServiceFactory>`
//! - Testing: `CredentialsApi<ScriptedPrompter, RecordingFactory>`

use crate::commands::{ActionContext, CmdResult};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::registry::Registry;
use crate::service::ServiceFactory;
use tracing::debug;

pub struct CredentialsApi<P: Prompter, F: ServiceFactory> {
    registry: Registry,
    prompter: P,
    services: F,
}

impl<P: Prompter, F: ServiceFactory> CredentialsApi<P, F> {
    pub fn new(registry: Registry, prompter: P, services: F) -> Self {
        Self {
            registry,
            prompter,
            services,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn services(&self) -> &F {
        &self.services
    }

    pub fn run<I, T>(&mut self, name: &str, args: I) -> Result<CmdResult>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let command = self.registry.lookup(name)?;
        let flags = command.schema.parse(args)?;
        debug!(command = name, supplied = flags.len(), "dispatching");

        let mut ctx = ActionContext::new(&mut self.prompter, &self.services);
        (command.action)(&flags, &mut ctx)
    }
}
