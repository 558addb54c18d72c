//! Automaton definition and construction-time validation
//!
//! A [`Dfa`] is immutable once built: every structural invariant (start state
//! membership, accepting-set membership, totality of the transition table over
//! states × alphabet) is checked at construction, so the simulator never has
//! to re-validate mid-run.

use crate::automaton::StateId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Verdict templates shown to the user once a simulation finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdicts {
    pub accept: String,
    pub reject: String,
}

impl Default for Verdicts {
    fn default() -> Self {
        Self {
            accept: "Accepted".to_string(),
            reject: "Rejected".to_string(),
        }
    }
}

/// A deterministic finite automaton.
///
/// States are the contiguous range `q0..q{n-1}`. The transition table is total
/// over the declared states and alphabet; a lookup can only miss when the
/// symbol itself is outside the alphabet.
#[derive(Debug, Clone)]
pub struct Dfa {
    name: String,
    state_count: u32,
    alphabet: BTreeSet<char>,
    table: HashMap<(StateId, char), StateId>,
    start: StateId,
    accepting: BTreeSet<StateId>,
    verdicts: Verdicts,
}

/// On-disk automaton definition (TOML)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DfaDocument {
    pub name: String,
    pub states: u32,
    pub start: u32,
    pub accepting: Vec<u32>,
    pub alphabet: Vec<char>,
    #[serde(default)]
    pub verdicts: Option<Verdicts>,
    #[serde(rename = "transition", default)]
    pub transitions: Vec<TransitionRule>,
}

/// One row of the transition table as written in a definition file
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransitionRule {
    pub from: u32,
    pub symbol: char,
    pub to: u32,
}

impl Dfa {
    /// Build a DFA, rejecting any definition that violates the structural
    /// invariants.
    pub fn new(
        name: impl Into<String>,
        state_count: u32,
        alphabet: impl IntoIterator<Item = char>,
        transitions: impl IntoIterator<Item = (u32, char, u32)>,
        start: u32,
        accepting: impl IntoIterator<Item = u32>,
        verdicts: Verdicts,
    ) -> Result<Self> {
        let name = name.into();
        let alphabet: BTreeSet<char> = alphabet.into_iter().collect();

        if state_count == 0 {
            return Err(Error::malformed_definition("automaton has no states"));
        }
        if alphabet.is_empty() {
            return Err(Error::malformed_definition("alphabet is empty"));
        }
        if start >= state_count {
            return Err(Error::malformed_definition(format!(
                "start state q{} is not among the {} declared states",
                start, state_count
            )));
        }

        let mut accepting_set = BTreeSet::new();
        for state in accepting {
            if state >= state_count {
                return Err(Error::malformed_definition(format!(
                    "accepting state q{} is not among the {} declared states",
                    state, state_count
                )));
            }
            accepting_set.insert(StateId(state));
        }

        let mut table = HashMap::new();
        for (from, symbol, to) in transitions {
            if from >= state_count {
                return Err(Error::malformed_definition(format!(
                    "transition source q{} is not a declared state",
                    from
                )));
            }
            if to >= state_count {
                return Err(Error::malformed_definition(format!(
                    "transition target q{} is not a declared state",
                    to
                )));
            }
            if !alphabet.contains(&symbol) {
                return Err(Error::malformed_definition(format!(
                    "transition on '{}' uses a symbol outside the alphabet",
                    symbol
                )));
            }
            if table
                .insert((StateId(from), symbol), StateId(to))
                .is_some()
            {
                return Err(Error::malformed_definition(format!(
                    "duplicate transition for (q{}, '{}')",
                    from, symbol
                )));
            }
        }

        // Totality: every (state, symbol) pair must have exactly one entry
        for state in 0..state_count {
            for &symbol in &alphabet {
                if !table.contains_key(&(StateId(state), symbol)) {
                    return Err(Error::malformed_definition(format!(
                        "missing transition for (q{}, '{}')",
                        state, symbol
                    )));
                }
            }
        }

        Ok(Self {
            name,
            state_count,
            alphabet,
            table,
            start: StateId(start),
            accepting: accepting_set,
            verdicts,
        })
    }

    /// Load and validate an automaton definition from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)?;
        let doc: DfaDocument = toml::from_str(&contents).map_err(|e| Error::DefinitionParse {
            file: path.clone(),
            message: e.to_string(),
        })?;
        Self::from_document(doc)
    }

    /// Validate a parsed definition document
    pub fn from_document(doc: DfaDocument) -> Result<Self> {
        Dfa::new(
            doc.name,
            doc.states,
            doc.alphabet,
            doc.transitions.iter().map(|t| (t.from, t.symbol, t.to)),
            doc.start,
            doc.accepting,
            doc.verdicts.unwrap_or_default(),
        )
    }

    /// Human-readable name of the automaton
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The start state
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Number of declared states
    pub fn state_count(&self) -> u32 {
        self.state_count
    }

    /// The declared alphabet, in sorted order
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    /// Whether a symbol belongs to the alphabet
    pub fn contains_symbol(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Whether a state is accepting
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The accepting states, in sorted order
    pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting.iter().copied()
    }

    /// Look up the successor for `(state, symbol)`.
    ///
    /// Returns `None` only when the symbol is outside the alphabet or the
    /// state is undeclared; the table is total otherwise. Callers translate a
    /// miss into an explicit error rather than falling back to any sentinel.
    pub fn step(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.table.get(&(state, symbol)).copied()
    }

    /// All transitions in (state, symbol) order, for table rendering
    pub fn transitions(&self) -> Vec<(StateId, char, StateId)> {
        let mut rows: Vec<_> = self
            .table
            .iter()
            .map(|(&(from, symbol), &to)| (from, symbol, to))
            .collect();
        rows.sort_unstable_by_key(|&(from, symbol, _)| (from, symbol));
        rows
    }

    /// Verdict template for the given outcome
    pub fn verdict(&self, accepted: bool) -> &str {
        if accepted {
            &self.verdicts.accept
        } else {
            &self.verdicts.reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state_doc() -> DfaDocument {
        DfaDocument {
            name: "toggle".to_string(),
            states: 2,
            start: 0,
            accepting: vec![1],
            alphabet: vec!['a'],
            verdicts: None,
            transitions: vec![
                TransitionRule {
                    from: 0,
                    symbol: 'a',
                    to: 1,
                },
                TransitionRule {
                    from: 1,
                    symbol: 'a',
                    to: 0,
                },
            ],
        }
    }

    #[test]
    fn test_valid_definition() {
        let dfa = Dfa::from_document(two_state_doc()).unwrap();
        assert_eq!(dfa.start(), StateId(0));
        assert_eq!(dfa.step(StateId(0), 'a'), Some(StateId(1)));
        assert_eq!(dfa.step(StateId(1), 'a'), Some(StateId(0)));
        assert!(dfa.is_accepting(StateId(1)));
        assert!(!dfa.is_accepting(StateId(0)));
    }

    #[test]
    fn test_out_of_alphabet_lookup_misses() {
        let dfa = Dfa::from_document(two_state_doc()).unwrap();
        assert_eq!(dfa.step(StateId(0), 'z'), None);
    }

    #[test]
    fn test_rejects_start_outside_states() {
        let mut doc = two_state_doc();
        doc.start = 5;
        let err = Dfa::from_document(doc).unwrap_err();
        assert!(matches!(err, Error::MalformedDefinition(_)));
    }

    #[test]
    fn test_rejects_accepting_outside_states() {
        let mut doc = two_state_doc();
        doc.accepting = vec![2];
        assert!(Dfa::from_document(doc).is_err());
    }

    #[test]
    fn test_rejects_partial_table() {
        let mut doc = two_state_doc();
        doc.transitions.pop();
        let err = Dfa::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("missing transition"));
    }

    #[test]
    fn test_rejects_duplicate_transition() {
        let mut doc = two_state_doc();
        doc.transitions.push(TransitionRule {
            from: 0,
            symbol: 'a',
            to: 0,
        });
        let err = Dfa::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("duplicate transition"));
    }

    #[test]
    fn test_rejects_transition_outside_alphabet() {
        let mut doc = two_state_doc();
        doc.transitions[0].symbol = 'x';
        assert!(Dfa::from_document(doc).is_err());
    }

    #[test]
    fn test_parse_toml_definition() {
        let toml = r#"
name = "toggle"
states = 2
start = 0
accepting = [1]
alphabet = ["a"]

[verdicts]
accept = "Accepted (odd length)"
reject = "Rejected (even length)"

[[transition]]
from = 0
symbol = "a"
to = 1

[[transition]]
from = 1
symbol = "a"
to = 0
"#;

        let doc: DfaDocument = toml::from_str(toml).unwrap();
        let dfa = Dfa::from_document(doc).unwrap();
        assert_eq!(dfa.name(), "toggle");
        assert_eq!(dfa.verdict(true), "Accepted (odd length)");
        assert_eq!(dfa.verdict(false), "Rejected (even length)");
    }

    #[test]
    fn test_transitions_sorted() {
        let dfa = Dfa::from_document(two_state_doc()).unwrap();
        let rows = dfa.transitions();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (StateId(0), 'a', StateId(1)));
        assert_eq!(rows[1], (StateId(1), 'a', StateId(0)));
    }
}
