//! kmp-dfa: Knuth-Morris-Pratt substring search driven by a sparse DFA
//!
//! The pattern is compiled once into a deterministic automaton; every search
//! then reads the text left to right exactly once, never backing up.
//!
//! ```
//! use kmp_dfa::Kmp;
//!
//! let kmp = Kmp::new(b"abc").unwrap();
//! assert_eq!(kmp.find(b"xabcabc"), Some(1));
//! assert_eq!(kmp.find(b"xyz"), None);
//! ```
//!
//! A built automaton is immutable, so it can be shared across threads:
//! ```
//! use kmp_dfa::Kmp;
//! use std::sync::Arc;
//!
//! let kmp = Arc::new(Kmp::from_symbols("needle".chars()).unwrap());
//! let worker = {
//!     let kmp = Arc::clone(&kmp);
//!     std::thread::spawn(move || kmp.find_str("haystack with a needle"))
//! };
//! assert_eq!(worker.join().unwrap(), Some(16));
//! ```

pub mod automaton;

use std::fmt;
use std::hash::Hash;

use log::trace;

use automaton::{simulate, write_table, DumpSymbol, TransitionTable};

/// Errors that can occur while building an automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KmpError {
    InvalidPattern(String),
}

impl fmt::Display for KmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmpError::InvalidPattern(msg) => write!(f, "invalid pattern: {}", msg),
        }
    }
}

impl std::error::Error for KmpError {}

/// A compiled pattern: the pattern symbols plus their KMP automaton.
///
/// `S` is the symbol type, usually `u8` for byte strings or `char` for text
/// compared by code point.
#[derive(Clone, Debug)]
pub struct Kmp<S> {
    pattern: Box<[S]>,
    table: TransitionTable<S>,
}

impl<S: Copy + Eq + Hash> Kmp<S> {
    /// Compile `pattern`. Fails with `KmpError::InvalidPattern` if it is empty.
    pub fn new(pattern: &[S]) -> Result<Self, KmpError> {
        let table = TransitionTable::build(pattern)?;
        Ok(Self {
            pattern: pattern.into(),
            table,
        })
    }

    /// Compile a pattern given as any sequence of symbols.
    pub fn from_symbols<I: IntoIterator<Item = S>>(pattern: I) -> Result<Self, KmpError> {
        let pattern: Vec<S> = pattern.into_iter().collect();
        Self::new(&pattern)
    }

    /// Index of the first occurrence of the pattern in `text`, if any.
    pub fn find(&self, text: &[S]) -> Option<usize> {
        self.find_symbols(text.iter().copied())
    }

    /// Like [`find`](Self::find), for text that is not already a slice.
    pub fn find_symbols<I: IntoIterator<Item = S>>(&self, text: I) -> Option<usize> {
        let found = simulate(&self.table, text);
        match found {
            Some(at) => trace!("pattern of length {} found at {}", self.pattern.len(), at),
            None => trace!("pattern of length {} not found", self.pattern.len()),
        }
        found
    }
}

impl<S> Kmp<S> {
    /// The pattern this automaton was built from.
    pub fn pattern(&self) -> &[S] {
        &self.pattern
    }

    /// Number of symbols in the pattern. Never zero.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// The underlying transition table.
    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }
}

impl Kmp<u8> {
    /// Search the UTF-8 bytes of `text`. The result is a byte offset.
    pub fn find_str(&self, text: &str) -> Option<usize> {
        self.find(text.as_bytes())
    }
}

impl Kmp<char> {
    /// Search the chars of `text`. The result counts chars, not bytes.
    pub fn find_str(&self, text: &str) -> Option<usize> {
        self.find_symbols(text.chars())
    }
}

impl<S: DumpSymbol> Kmp<S> {
    /// Render the transition table, one row per symbol of the pattern.
    pub fn dump_table(&self) -> String {
        self.to_string()
    }
}

impl<S: DumpSymbol> fmt::Display for Kmp<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, &self.pattern, &self.table)
    }
}

/// Compile `pattern` and return the index of its first occurrence in `text`.
///
/// Build a [`Kmp`] instead when the same pattern is searched for more than once.
pub fn search<S: Copy + Eq + Hash>(pattern: &[S], text: &[S]) -> Result<Option<usize>, KmpError> {
    Ok(Kmp::new(pattern)?.find(text))
}
