//! KMP automaton: construction, simulation and diagnostics.
//!
//! - `dfa`: sparse transition table built from the pattern (`TransitionTable`)
//! - `simulate`: single left-to-right pass of the table over a text
//! - `dump`: tabular rendering of a table for debugging

mod dfa;
mod dump;
mod simulate;

pub use dfa::TransitionTable;
pub use dump::{write_table, DumpSymbol};
pub use simulate::simulate;
