//! Command-line interface, clap-based.
//!
//! The binary is a thin wrapper for poking at the workflow core: a
//! scripted demo of the assignment flow and a config inspection
//! command.

use clap::{Parser, Subcommand};

/// Giglink — marketplace workflow core.
#[derive(Debug, Parser)]
#[command(name = "giglink", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in demo: post, apply, verify, assign, complete.
    Demo,

    /// Print the effective configuration.
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_demo_subcommand() {
        let cli = Cli::parse_from(["giglink", "demo"]);
        assert!(matches!(cli.command, Command::Demo));
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_global_verbose_flag() {
        let cli = Cli::parse_from(["giglink", "--verbose", "config"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Config));
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
