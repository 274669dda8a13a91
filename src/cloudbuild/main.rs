//! # CloudBuild CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ```text
//! cloudbuild <command> [--flag=value ...]
//! ```
//!
//! - `cli/setup.rs`: top-level clap parser, grouped help, logging setup
//! - `cli/commands.rs`: registry check, command selection, dispatch through the API
//! - `cli/render.rs`: turns `CmdResult` values into terminal output
//!
//! Any failure (unknown command, bad flag, aborted prompt, remote error) is printed to
//! stderr and the process exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
