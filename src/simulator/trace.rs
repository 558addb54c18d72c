//! Trace representation

use crate::automaton::StateId;
use serde::{Deserialize, Serialize};

/// One consumed symbol: where the automaton was, what it read, where it went.
///
/// `is_final_step` and `is_accepting` are independent flags; a record can be
/// accepting mid-string without deciding the verdict, and only the last
/// record's flags match the overall outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub step: usize,
    pub from: StateId,
    pub symbol: char,
    pub to: StateId,
    pub is_final_step: bool,
    pub is_accepting: bool,
}

/// The complete outcome of one simulation run.
///
/// Freshly allocated per run and never mutated afterwards; reruns produce new
/// values instead of patching old ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Every transition taken, in input order
    pub trace: Vec<TransitionRecord>,
    /// The state the automaton halted in
    pub final_state: StateId,
    /// Whether the final state is accepting
    pub accepted: bool,
}
