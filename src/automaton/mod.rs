//! Automaton module - DFA definitions and the built-in example automata

pub mod builtin;
pub mod definition;
pub mod state;

// Re-export key types
pub use builtin::{parity, substring_bab};
pub use definition::{Dfa, DfaDocument, TransitionRule, Verdicts};
pub use state::StateId;
