//! Output formatting module
//!
//! This module handles rendering simulation reports and automaton definitions
//! for the terminal.

use crate::{Result, automaton::Dfa, report::Report};

/// Output a simulation report as JSON
pub fn output_json(w: &mut impl std::io::Write, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output a simulation report as a text table
pub fn output_table(w: &mut impl std::io::Write, report: &Report) -> Result<()> {
    writeln!(w, "DFA Simulation - {}", report.automaton)?;
    writeln!(w, "{}", "=".repeat(60))?;
    writeln!(w)?;

    writeln!(w, "Result: {}", report.verdict)?;
    writeln!(w, "Final state: {}", report.final_state)?;
    writeln!(w)?;

    writeln!(w, "State Transitions:")?;
    writeln!(w, "{:-<60}", "")?;
    writeln!(
        w,
        "{:<15} {:<8} {:<12} {:<15}",
        "Current State", "Input", "Next State", "Status"
    )?;
    writeln!(w, "{:-<60}", "")?;

    for row in &report.rows {
        writeln!(
            w,
            "{:<15} {:<8} {:<12} {:<15}",
            row.state, row.input, row.next_state, row.status
        )?;
    }
    writeln!(w)?;

    Ok(())
}

/// Output an automaton's transition table and summary
pub fn output_definition(w: &mut impl std::io::Write, dfa: &Dfa) -> Result<()> {
    writeln!(w, "Automaton: {}", dfa.name())?;
    writeln!(w, "{}", "=".repeat(60))?;
    writeln!(w)?;

    writeln!(w, "States:    {}", dfa.state_count())?;
    writeln!(w, "Start:     {}", dfa.start())?;
    writeln!(
        w,
        "Accepting: {}",
        dfa.accepting_states()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(
        w,
        "Alphabet:  {}",
        dfa.alphabet()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(w)?;

    writeln!(w, "Transition Table:")?;
    writeln!(w, "{:-<40}", "")?;
    writeln!(w, "{:<10} {:<8} {:<10}", "State", "Symbol", "Next")?;
    writeln!(w, "{:-<40}", "")?;

    for (from, symbol, to) in dfa.transitions() {
        writeln!(w, "{:<10} {:<8} {:<10}", from.to_string(), symbol, to.to_string())?;
    }
    writeln!(w)?;

    Ok(())
}
