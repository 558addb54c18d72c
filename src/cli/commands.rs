//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::automaton::{self, Dfa};
use crate::cli::AutomatonKind;
use crate::{Config, Error, Result, cli::Cli};
use std::path::{Path, PathBuf};

/// Resolve which automaton to run: an explicit definition file wins, then the
/// --automaton flag, then the configured default.
fn resolve_automaton(
    kind: Option<AutomatonKind>,
    definition: Option<&Path>,
    config: &Config,
) -> Result<Dfa> {
    if let Some(path) = definition {
        tracing::info!("Loading automaton definition from {:?}", path);
        return Dfa::from_file(path);
    }

    if let Some(kind) = kind {
        return Ok(builtin(kind));
    }

    match config.default.automaton.as_str() {
        "parity" => Ok(automaton::parity()),
        "substring-bab" => Ok(automaton::substring_bab()),
        other => Err(Error::config(format!(
            "Unknown default automaton {:?} (expected \"parity\" or \"substring-bab\")",
            other
        ))),
    }
}

fn builtin(kind: AutomatonKind) -> Dfa {
    match kind {
        AutomatonKind::Parity => automaton::parity(),
        AutomatonKind::SubstringBab => automaton::substring_bab(),
    }
}

/// Check command implementation
pub mod check {
    use super::*;
    use crate::cli::{Commands, OutputFormat};
    use crate::report::Report;
    use crate::simulator;

    /// Execute the check command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (input, kind, definition, output_format) = match args.command {
            Commands::Check {
                input,
                automaton,
                definition,
                output,
            } => (input, automaton, definition, output),
            _ => unreachable!("check::execute called with wrong command"),
        };

        let dfa = resolve_automaton(kind, definition.as_deref(), &config)?;

        tracing::info!("Running {} over {:?}", dfa.name(), input);
        let result =
            simulator::simulate_with_limit(&dfa, &input, config.simulator.max_input_len)?;

        let report = Report::new(&dfa, &result);
        match output_format {
            OutputFormat::Table => {
                crate::cli::output::output_table(&mut std::io::stdout(), &report)?;
            }
            OutputFormat::Json => {
                crate::cli::output::output_json(&mut std::io::stdout(), &report)?;
            }
        }

        Ok(())
    }
}

/// Inspect command implementation
pub mod inspect {
    use super::*;
    use crate::cli::Commands;

    /// Execute the inspect command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (kind, definition) = match args.command {
            Commands::Inspect {
                automaton,
                definition,
            } => (automaton, definition),
            _ => unreachable!("inspect::execute called with wrong command"),
        };

        let dfa = resolve_automaton(kind, definition.as_deref(), &config)?;
        crate::cli::output::output_definition(&mut std::io::stdout(), &dfa)?;

        Ok(())
    }
}

/// Validate command implementation
pub mod validate {
    use super::*;
    use crate::automaton::{DfaDocument, StateId};
    use std::collections::BTreeSet;

    /// Execute the validate command
    pub fn execute(definition_path: PathBuf) -> Result<()> {
        tracing::info!("Validating definition: {:?}", definition_path);

        let contents = std::fs::read_to_string(&definition_path)?;
        let doc: DfaDocument =
            toml::from_str(&contents).map_err(|e| Error::DefinitionParse {
                file: definition_path.clone(),
                message: e.to_string(),
            })?;

        println!("Automaton Definition Report");
        println!("{}", "=".repeat(43));
        println!("File: {:?}", definition_path);
        println!();
        println!("Name:      {}", doc.name);
        println!("States:    {}", doc.states);
        println!("Start:     q{}", doc.start);
        println!(
            "Accepting: {}",
            doc.accepting
                .iter()
                .map(|s| format!("q{}", s))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "Alphabet:  {}",
            doc.alphabet
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Rules:     {}", doc.transitions.len());
        println!();

        // Structural invariants are enforced by the constructor
        let dfa = match Dfa::from_document(doc) {
            Ok(dfa) => dfa,
            Err(e) => {
                println!("Definition is invalid: {}", e);
                return Err(e);
            }
        };

        // Warnings: legal definitions that still look like mistakes
        let mut warnings = Vec::new();
        if dfa.accepting_states().next().is_none() {
            warnings.push("no accepting states: every input will be rejected".to_string());
        }
        let reachable = reachable_states(&dfa);
        for state in 0..dfa.state_count() {
            if !reachable.contains(&StateId(state)) {
                warnings.push(format!(
                    "state q{} is unreachable from the start state",
                    state
                ));
            }
        }

        if !warnings.is_empty() {
            println!("Warnings:");
            for warning in &warnings {
                println!("   {}", warning);
            }
            println!();
        }

        println!("Definition is valid");
        Ok(())
    }

    /// States reachable from the start state by following the table
    fn reachable_states(dfa: &Dfa) -> BTreeSet<StateId> {
        let mut seen = BTreeSet::from([dfa.start()]);
        let mut frontier = vec![dfa.start()];
        while let Some(state) = frontier.pop() {
            for symbol in dfa.alphabet() {
                if let Some(next) = dfa.step(state, symbol)
                    && seen.insert(next)
                {
                    frontier.push(next);
                }
            }
        }
        seen
    }
}
