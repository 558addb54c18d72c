//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// DFA Simulator CLI
#[derive(Parser, Debug)]
#[command(name = "dfa-trace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "DFA_TRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an automaton over an input string and print the verdict and trace
    Check {
        /// Input string to simulate
        input: String,

        /// Built-in automaton to run
        #[arg(short, long, value_enum)]
        automaton: Option<AutomatonKind>,

        /// Path to a TOML automaton definition (overrides --automaton)
        #[arg(short, long)]
        definition: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Print an automaton's transition table and summary
    Inspect {
        /// Built-in automaton to inspect
        #[arg(short, long, value_enum)]
        automaton: Option<AutomatonKind>,

        /// Path to a TOML automaton definition (overrides --automaton)
        #[arg(short, long)]
        definition: Option<PathBuf>,
    },

    /// Validate a TOML automaton definition file
    Validate {
        /// Path to definition file
        definition: PathBuf,
    },
}

/// Built-in automaton variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AutomatonKind {
    /// Odd number of a's and even number of b's
    Parity,
    /// Contains the substring "bab"
    SubstringBab,
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text table
    Table,
    /// JSON output
    Json,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Check { .. } => commands::check::execute(args, config),
        Commands::Inspect { .. } => commands::inspect::execute(args, config),
        Commands::Validate { definition } => commands::validate::execute(definition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        // Test basic parsing
        let cli = Cli::try_parse_from(["dfa-trace", "check", "abab", "--automaton", "parity"]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parsing_json_output() {
        let cli = Cli::try_parse_from([
            "dfa-trace",
            "check",
            "bab",
            "--automaton",
            "substring-bab",
            "--output",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                input,
                automaton,
                output,
                ..
            } => {
                assert_eq!(input, "bab");
                assert_eq!(automaton, Some(AutomatonKind::SubstringBab));
                assert_eq!(output, OutputFormat::Json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_cli_parsing_validate() {
        let cli = Cli::try_parse_from(["dfa-trace", "validate", "machine.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }
}
