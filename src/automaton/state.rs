//! State representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state in a deterministic finite automaton.
///
/// States carry no identity beyond their index; the automaton that owns them
/// gives them meaning. Displays as `q{n}` (`q0`, `q1`, ...), the conventional
/// textbook labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Label used everywhere a state is shown to the user
    pub fn label(self) -> String {
        format!("q{}", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(id: u32) -> Self {
        StateId(id)
    }
}
