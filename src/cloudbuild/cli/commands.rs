//! # CLI Layer
//!
//! The only place that knows about the terminal. `run()`:
//!
//! 1. parses the top-level arguments and sets up logging
//! 2. builds the command registry, whose constructor checks the catalog against the
//!    display order before anything else happens
//! 3. handles help requests without touching configuration or the network
//! 4. hands the command name and its raw flags to the API and renders the result
//!
//! Errors bubble up to `main`, which prints them and exits non-zero.

use super::render::render_result;
use super::setup::{init_logging, print_grouped_help, Cli};
use clap::Parser;
use cloudbuild::api::CredentialsApi;
use cloudbuild::config::CloudBuildConfig;
use cloudbuild::error::Result;
use cloudbuild::prompt::terminal::TerminalPrompter;
use cloudbuild::registry::Registry;
use cloudbuild::service::http::HttpServiceFactory;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = Registry::builtin()?;

    let name = match cli.command.as_deref() {
        None => {
            print_grouped_help(&registry);
            return Ok(());
        }
        Some("help") => return handle_help(&registry, cli.args.first().map(String::as_str)),
        Some(name) => name,
    };

    if cli.help || wants_help(&cli.args) {
        return handle_help(&registry, Some(name));
    }

    let config = CloudBuildConfig::load_effective()?;
    debug!(api_url = %config.api_url, "loaded config");

    let mut api = CredentialsApi::new(
        registry,
        TerminalPrompter::new(),
        HttpServiceFactory::new(config),
    );
    let result = api.run(name, cli.args.iter().cloned())?;
    render_result(&result);
    Ok(())
}

fn handle_help(registry: &Registry, command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print!("{}", registry.help_for(name)?),
        None => print_grouped_help(registry),
    }
    Ok(())
}

fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}
