//! Human-readable rendering of a transition table.
//!
//! ```text
//!      A B A B A C
//!      0 1 2 3 4 5 <- Current State
//! A -> 1 1 3 1 5 1
//! B -> 0 2 0 4 0 4
//! C -> 0 0 0 0 0 6
//! ```
//!
//! Columns widen to fit multi-digit states or long symbol labels.

use std::fmt::{self, Write};
use std::hash::Hash;

use super::dfa::TransitionTable;

/// Symbols that can label a row or column of the dump.
pub trait DumpSymbol: Copy + Eq + Hash + Ord {
    fn write_label(&self, out: &mut dyn Write) -> fmt::Result;
}

impl DumpSymbol for char {
    fn write_label(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_char(*self)
    }
}

impl DumpSymbol for u8 {
    /// Printable ASCII as-is, everything else escaped (`\n`, `\xff`).
    fn write_label(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{}", self.escape_ascii())
    }
}

impl DumpSymbol for u16 {
    fn write_label(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{:#06x}", self)
    }
}

impl DumpSymbol for u32 {
    fn write_label(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{:#010x}", self)
    }
}

fn label<S: DumpSymbol>(symbol: S) -> Result<String, fmt::Error> {
    let mut s = String::new();
    symbol.write_label(&mut s)?;
    Ok(s)
}

fn write_cells<W, I>(out: &mut W, cells: I, width: usize) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{:>width$}", cell)?;
    }
    Ok(())
}

/// Write the pattern header, the state index line and one row per known symbol.
pub fn write_table<S, W>(out: &mut W, pattern: &[S], table: &TransitionTable<S>) -> fmt::Result
where
    S: DumpSymbol,
    W: Write + ?Sized,
{
    let columns = pattern
        .iter()
        .map(|&s| label(s))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = table
        .alphabet()
        .into_iter()
        .map(|s| -> Result<_, fmt::Error> { Ok((label(s)?, table.row(s).unwrap_or(&[]))) })
        .collect::<Result<Vec<_>, _>>()?;

    let state_width = table.pattern_len().to_string().len();
    let width = columns
        .iter()
        .map(|c| c.chars().count())
        .fold(state_width, usize::max);
    let label_width = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(1);
    let indent = label_width + " -> ".len();

    write!(out, "{:indent$}", "")?;
    write_cells(out, &columns, width)?;
    out.write_char('\n')?;

    write!(out, "{:indent$}", "")?;
    write_cells(out, 0..table.pattern_len(), width)?;
    out.write_str(" <- Current State\n")?;

    for (l, row) in &rows {
        write!(out, "{:<label_width$} -> ", l)?;
        write_cells(out, row.iter(), width)?;
        out.write_char('\n')?;
    }

    Ok(())
}
