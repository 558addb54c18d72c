//! Built-in example automata
//!
//! Both operate over the alphabet `{a, b}` with four states.

use crate::automaton::{Dfa, Verdicts};

/// Acceptor for strings with an odd number of a's and an even number of b's.
///
/// States encode the pair (a-parity, b-parity): q0 = (even, even),
/// q1 = (odd, even), q2 = (even, odd), q3 = (odd, odd). Reading `a` flips the
/// a-parity, reading `b` flips the b-parity. Only q1 accepts.
pub fn parity() -> Dfa {
    Dfa::new(
        "parity",
        4,
        ['a', 'b'],
        [
            (0, 'a', 1),
            (0, 'b', 2),
            (1, 'a', 0),
            (1, 'b', 3),
            (2, 'a', 3),
            (2, 'b', 0),
            (3, 'a', 2),
            (3, 'b', 1),
        ],
        0,
        [1],
        Verdicts {
            accept: "Accepted (Odd a's and Even b's)".to_string(),
            reject: "Rejected (Does not satisfy conditions)".to_string(),
        },
    )
    .expect("built-in parity table is total")
}

/// Acceptor for strings containing the substring "bab".
///
/// States track how many leading symbols of "bab" the current suffix matches
/// (0 through 3). q3 is sticky: once "bab" has been seen it self-loops on both
/// symbols, so the verdict can never be lost.
pub fn substring_bab() -> Dfa {
    Dfa::new(
        "substring-bab",
        4,
        ['a', 'b'],
        [
            (0, 'a', 0),
            (0, 'b', 1),
            (1, 'a', 2),
            (1, 'b', 1),
            (2, 'a', 0),
            (2, 'b', 3),
            (3, 'a', 3),
            (3, 'b', 3),
        ],
        0,
        [3],
        Verdicts {
            accept: "Accepted (Contains substring 'bab')".to_string(),
            reject: "Rejected (Does not contain 'bab')".to_string(),
        },
    )
    .expect("built-in substring table is total")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::StateId;

    #[test]
    fn test_parity_table() {
        let dfa = parity();
        assert_eq!(dfa.start(), StateId(0));
        assert_eq!(dfa.state_count(), 4);
        assert_eq!(dfa.step(StateId(0), 'a'), Some(StateId(1)));
        assert_eq!(dfa.step(StateId(1), 'b'), Some(StateId(3)));
        assert_eq!(dfa.step(StateId(3), 'b'), Some(StateId(1)));
        assert!(dfa.is_accepting(StateId(1)));
        assert!(!dfa.is_accepting(StateId(0)));
    }

    #[test]
    fn test_parity_transitions_flip_one_parity() {
        // Reading the same symbol twice must return to the original state.
        let dfa = parity();
        for state in 0..4 {
            for symbol in ['a', 'b'] {
                let once = dfa.step(StateId(state), symbol).unwrap();
                let twice = dfa.step(once, symbol).unwrap();
                assert_eq!(twice, StateId(state));
            }
        }
    }

    #[test]
    fn test_substring_sticky_state() {
        let dfa = substring_bab();
        assert_eq!(dfa.step(StateId(3), 'a'), Some(StateId(3)));
        assert_eq!(dfa.step(StateId(3), 'b'), Some(StateId(3)));
        assert!(dfa.is_accepting(StateId(3)));
    }

    #[test]
    fn test_substring_prefix_tracking() {
        let dfa = substring_bab();
        // "ba" matched, then "b" completes the pattern
        assert_eq!(dfa.step(StateId(0), 'b'), Some(StateId(1)));
        assert_eq!(dfa.step(StateId(1), 'a'), Some(StateId(2)));
        assert_eq!(dfa.step(StateId(2), 'b'), Some(StateId(3)));
        // "ba" followed by "a" drops back to no match
        assert_eq!(dfa.step(StateId(2), 'a'), Some(StateId(0)));
    }
}
