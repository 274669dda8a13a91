//! # CloudBuild Credentials Architecture
//!
//! `cloudbuild` manages iOS signing credentials on Unity Cloud Build. The library holds all
//! of the logic; the `cloudbuild` binary is one thin client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Selects the command, renders results, sets exit codes    │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Registry lookup → flag parsing → action                  │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, registry.rs)                 │
//! │  - One action per command, declared with its flag schema    │
//! │  - Parameters filled by the generic resolver (resolve.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators                                              │
//! │  - prompt/: interactive questions (Prompter trait)          │
//! │  - service/: remote CRUD (CredentialsService trait)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Argument Resolution
//!
//! A command never parses or prompts by hand. It lists its parameters as
//! [`resolve::Field`]s; [`resolve::resolve`] copies supplied flags verbatim and turns every
//! missing field into a required, lowercased interactive question. Adding a command means
//! adding a module under `commands/` and an entry in the registry, nothing else.
//!
//! ## Execution Model
//!
//! One command per process, fully synchronous. The interactive batch blocks until answered;
//! the remote call blocks until the round trip completes. The only shared state is the
//! read-only [`registry::Registry`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for running a command
//! - [`registry`]: Command catalog and display order
//! - [`commands`]: One action per command
//! - [`flags`]: Flag schemas and resolved flags
//! - [`resolve`]: Flag/prompt reconciliation into typed parameters
//! - [`prompt`]: Interactive question batches
//! - [`service`]: Remote credential service
//! - [`model`]: Credential data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flags;
pub mod model;
pub mod prompt;
pub mod registry;
pub mod resolve;
pub mod service;
