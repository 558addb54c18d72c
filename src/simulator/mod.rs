//! Simulator module - Run a DFA over an input string and record every step
//!
//! The simulator is a pure function of its arguments: the automaton is shared
//! read-only, no state survives between calls, and two runs over the same
//! normalized input produce identical results.
//!
//! Out-of-alphabet symbols fail the run with [`Error::InvalidSymbol`] rather
//! than being routed into an unreachable sink state or silently skipped; the
//! partial trace accumulated before the bad symbol is discarded.

use crate::automaton::Dfa;
use crate::error::{Error, Result};

pub mod trace;

// Re-export key types
pub use trace::{SimulationResult, TransitionRecord};

/// Defensive cap on input length. Interactive inputs are tiny; anything near
/// this size is almost certainly a caller bug.
pub const DEFAULT_MAX_INPUT_LEN: usize = 10_000;

/// Normalize raw user input: drop whitespace and lowercase.
///
/// Whitespace is presentation, not content, so it is removed wherever it
/// appears; `"a b"` runs the same transitions as `"ab"`. The built-in
/// alphabets are lowercase, so `"AB"` and `"ab"` are also equivalent.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Run `dfa` over `raw` with the default input-length guard.
pub fn simulate(dfa: &Dfa, raw: &str) -> Result<SimulationResult> {
    simulate_with_limit(dfa, raw, DEFAULT_MAX_INPUT_LEN)
}

/// Run `dfa` over `raw`, failing if the normalized input exceeds `max_len`.
///
/// Fails with [`Error::EmptyInput`] when normalization leaves zero symbols and
/// [`Error::InvalidSymbol`] at the first out-of-alphabet symbol.
pub fn simulate_with_limit(dfa: &Dfa, raw: &str, max_len: usize) -> Result<SimulationResult> {
    let input = normalize(raw);
    let symbols: Vec<char> = input.chars().collect();

    if symbols.is_empty() {
        return Err(Error::EmptyInput);
    }
    if symbols.len() > max_len {
        return Err(Error::InputTooLong {
            length: symbols.len(),
            limit: max_len,
        });
    }

    let mut current = dfa.start();
    let mut trace = Vec::with_capacity(symbols.len());

    for (i, &symbol) in symbols.iter().enumerate() {
        let next = dfa
            .step(current, symbol)
            .ok_or(Error::InvalidSymbol {
                position: i,
                symbol,
            })?;

        trace.push(TransitionRecord {
            step: i,
            from: current,
            symbol,
            to: next,
            is_final_step: i == symbols.len() - 1,
            is_accepting: dfa.is_accepting(next),
        });

        current = next;
    }

    let accepted = dfa.is_accepting(current);
    tracing::debug!(
        automaton = dfa.name(),
        symbols = symbols.len(),
        final_state = %current,
        accepted,
        "simulation finished"
    );

    Ok(SimulationResult {
        trace,
        final_state: current,
        accepted,
    })
}
