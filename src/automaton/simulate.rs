//! DFA simulation over a text.

use std::hash::Hash;

use super::dfa::TransitionTable;

/// Run the automaton over `text` and return the start of the first match.
///
/// Every symbol is read once, left to right; the scan never backs up. An
/// unknown symbol resets the automaton to state 0, since it cannot be part of
/// any occurrence of the pattern.
#[inline]
pub fn simulate<S, I>(table: &TransitionTable<S>, text: I) -> Option<usize>
where
    S: Copy + Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let m = table.pattern_len();
    let mut state = 0;

    for (i, symbol) in text.into_iter().enumerate() {
        state = table.next_state(state, symbol);
        if state == m {
            return Some(i + 1 - m);
        }
    }

    None
}
