//! # Command Actions
//!
//! One module per command. Each module declares:
//!
//! - its flag schema (`schema()`), always including the `apiKey` / `orgId` auth flags
//! - a typed parameter struct implementing [`Params`](crate::resolve::Params)
//! - `run()`, the action: resolve parameters, connect, perform exactly one remote call
//! - `command()`, the registry entry tying the three together
//!
//! Actions hold no state. Everything they need arrives through [`ActionContext`], which
//! lends them the prompter and the service factory for the duration of one invocation.

use crate::error::Result;
use crate::flags::ResolvedFlags;
use crate::model::IosCredential;
use crate::prompt::Prompter;
use crate::resolve::{resolve, Params};
use crate::service::{Credentials, CredentialsService, ServiceFactory};
use tracing::debug;

pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;
pub mod upload;

/// What an action produced, for the UI layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdResult {
    Credential(IosCredential),
    Credentials(Vec<IosCredential>),
    /// Short status indicator, e.g. the HTTP status of a delete.
    Status(String),
}

pub type Action = fn(&ResolvedFlags, &mut ActionContext<'_>) -> Result<CmdResult>;

pub struct ActionContext<'a> {
    prompter: &'a mut dyn Prompter,
    services: &'a dyn ServiceFactory,
}

impl<'a> ActionContext<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, services: &'a dyn ServiceFactory) -> Self {
        Self { prompter, services }
    }

    pub fn resolve<T: Params>(&mut self, flags: &ResolvedFlags) -> Result<T> {
        resolve(flags, &mut *self.prompter)
    }

    pub fn connect(&self, credentials: Credentials) -> Result<Box<dyn CredentialsService>> {
        debug!(org = %credentials.org_id, "building service client");
        self.services.connect(credentials)
    }
}
