use clap::{CommandFactory, Parser};
use cloudbuild::registry::Registry;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cloudbuild",
    bin_name = "cloudbuild",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Manage iOS signing credentials on Unity Cloud Build", long_about = None)]
pub struct Cli {
    /// Command to run
    pub command: Option<String>,

    /// Flags for the command, e.g. --projectId=abc
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

/// Top-level help: commands listed in the registry's display order.
pub fn get_grouped_help(registry: &Registry) -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("cloudbuild {version}\n"));
    output.push_str("Manage iOS signing credentials on Unity Cloud Build\n");
    output.push('\n');
    output.push_str("Usage: cloudbuild [OPTIONS] <COMMAND> [--flag=value ...]\n");
    output.push('\n');
    output.push_str("Commands:\n");
    for command in registry.ordered() {
        output.push_str(&format!("  {:<12} {}\n", command.name, command.help));
    }
    output.push('\n');
    output.push_str("Flags left out are asked for interactively.\n");
    output.push_str("Run `cloudbuild help <COMMAND>` for a command's flags.\n");
    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help(registry: &Registry) {
    print!("{}", get_grouped_help(registry));
}

/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug, else warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("cloudbuild=debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_and_passes_flags_through() {
        let cli = Cli::try_parse_from(["cloudbuild", "listCreds", "--projectId=p1"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("listCreds"));
        assert_eq!(cli.args, vec!["--projectId=p1"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_before_command() {
        let cli = Cli::try_parse_from(["cloudbuild", "-v", "getCred"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command.as_deref(), Some("getCred"));
        assert!(cli.args.is_empty());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["cloudbuild"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn grouped_help_follows_display_order() {
        let registry = Registry::builtin().unwrap();
        let help = get_grouped_help(&registry);

        let positions: Vec<usize> = registry
            .ordered_names()
            .iter()
            .map(|name| help.find(name).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(help.contains("Delete an iOS credential"));
    }
}
