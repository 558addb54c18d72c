//! Verdict and trace formatting
//!
//! Maps a [`SimulationResult`] into the display-ready shape the CLI renders:
//! a verdict line chosen from the automaton's templates and one row per
//! transition with `q`-prefixed state labels. Pure restructuring; every trace
//! record appears exactly once, in order.

use crate::automaton::Dfa;
use crate::simulator::{SimulationResult, TransitionRecord};
use serde::{Deserialize, Serialize};

/// Presentation-ready view of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub automaton: String,
    pub verdict: String,
    pub accepted: bool,
    pub final_state: String,
    pub rows: Vec<TraceRow>,
}

/// One rendered trace row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRow {
    pub state: String,
    pub input: char,
    pub next_state: String,
    pub status: String,
}

impl TraceRow {
    fn from_record(record: &TransitionRecord) -> Self {
        let status = if !record.is_final_step {
            "Processing...".to_string()
        } else if record.is_accepting {
            "Accepted".to_string()
        } else {
            "Rejected".to_string()
        };

        Self {
            state: record.from.label(),
            input: record.symbol,
            next_state: record.to.label(),
            status,
        }
    }
}

impl Report {
    /// Build a report from the automaton that produced `result`
    pub fn new(dfa: &Dfa, result: &SimulationResult) -> Self {
        Self {
            automaton: dfa.name().to_string(),
            verdict: dfa.verdict(result.accepted).to_string(),
            accepted: result.accepted,
            final_state: result.final_state.label(),
            rows: result.trace.iter().map(TraceRow::from_record).collect(),
        }
    }
}
