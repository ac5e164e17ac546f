//! Sparse transition table for the KMP automaton.
//!
//! The table only holds rows for symbols that appear in the pattern:
//! - `index`: maps a known symbol to its row number
//! - `states`: row-major arena of next states, one row of `m` entries per known symbol
//!
//! Symbols without a row are "unknown" and always send the automaton back to
//! state 0 (see [`TransitionTable::next_state`]).

use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::KmpError;

/// Index of a row in the state arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RowIdx(u32);

impl RowIdx {
    fn get(self) -> usize {
        self.0 as usize
    }
}

/// DFA built from a pattern.
///
/// `table[c][s]` is the state reached after reading `c` while in state `s`.
/// States run from `0` to `m` (the pattern length); `m` is accepting and has
/// no outgoing row entry, so every row is exactly `m` wide.
///
/// Immutable once built. It holds no interior mutability, so a shared
/// reference can be used from any number of threads at once.
#[derive(Clone, Debug)]
pub struct TransitionTable<S> {
    /// Pattern length, also the accepting state
    m: usize,
    /// Symbol -> row in `states`
    index: FxHashMap<S, RowIdx>,
    /// Row-major next states, `m` per row
    states: Vec<usize>,
}

impl<S: Copy + Eq + Hash> TransitionTable<S> {
    /// Build the automaton for `pattern`.
    ///
    /// Returns `KmpError::InvalidPattern` for an empty pattern.
    pub fn build(pattern: &[S]) -> Result<Self, KmpError> {
        let Some(&first) = pattern.first() else {
            return Err(KmpError::InvalidPattern(
                "pattern must contain at least one symbol".to_string(),
            ));
        };

        let mut table = Self {
            m: pattern.len(),
            index: FxHashMap::default(),
            states: Vec::new(),
        };

        let row = table.row_or_insert(first);
        table.set(row, 0, 1);

        // Restart state: where the automaton would be had it not matched
        // the symbol just accepted.
        let mut restart = 0;
        for (j, &symbol) in pattern.iter().enumerate().skip(1) {
            // Mismatch cases. A row created below is still all zero here,
            // so it is fine to skip it.
            for r in 0..table.row_count() {
                let row = RowIdx(r as u32);
                let copied = table.get(row, restart);
                table.set(row, j, copied);
            }

            let row = table.row_or_insert(symbol);
            table.set(row, j, j + 1);
            restart = table.get(row, restart);
        }

        debug!(
            "built KMP automaton: {} states, {} known symbols",
            table.m + 1,
            table.row_count()
        );

        Ok(table)
    }

    /// Next state after reading `symbol` in `state`.
    ///
    /// Symbols that never appear in the pattern reset the automaton to 0.
    /// The accepting state [`pattern_len`](Self::pattern_len) is terminal and
    /// maps to itself on every symbol.
    ///
    /// # Panics
    /// If `state` is greater than the pattern length.
    #[inline]
    pub fn next_state(&self, state: usize, symbol: S) -> usize {
        assert!(
            state <= self.m,
            "state {} out of range for a {}-symbol pattern",
            state,
            self.m
        );
        if state == self.m {
            return self.m;
        }
        match self.index.get(&symbol) {
            Some(&row) => self.get(row, state),
            None => 0,
        }
    }

    /// Full transition row for `symbol`, or `None` if the symbol is unknown.
    pub fn row(&self, symbol: S) -> Option<&[usize]> {
        let row = *self.index.get(&symbol)?;
        let start = row.get() * self.m;
        Some(&self.states[start..start + self.m])
    }

    /// Whether `symbol` has a row of its own.
    pub fn is_known(&self, symbol: S) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Find the row for `symbol`, appending an all-zero one if it is new.
    fn row_or_insert(&mut self, symbol: S) -> RowIdx {
        if let Some(&row) = self.index.get(&symbol) {
            return row;
        }
        let row = RowIdx(self.row_count() as u32);
        self.states.resize(self.states.len() + self.m, 0);
        self.index.insert(symbol, row);
        row
    }

    #[inline]
    fn get(&self, row: RowIdx, state: usize) -> usize {
        self.states[row.get() * self.m + state]
    }

    #[inline]
    fn set(&mut self, row: RowIdx, state: usize, next: usize) {
        self.states[row.get() * self.m + state] = next;
    }

    fn row_count(&self) -> usize {
        self.index.len()
    }
}

impl<S> TransitionTable<S> {
    /// Pattern length, which is also the accepting state.
    pub fn pattern_len(&self) -> usize {
        self.m
    }

    /// Number of symbols with a row in the table.
    pub fn alphabet_len(&self) -> usize {
        self.index.len()
    }
}

impl<S: Copy + Ord> TransitionTable<S> {
    /// Known symbols in ascending order.
    pub fn alphabet(&self) -> SmallVec<[S; 16]> {
        let mut symbols: SmallVec<[S; 16]> = self.index.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }
}
