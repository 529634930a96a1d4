//! Pattern post-processing: empty-cell filling and trailing-row stripping.

use super::{Pattern, Symbol};

/// Insert a `C` for every empty cell and collapse redundant content runs.
///
/// `DD` becomes `DCD`, `DR` becomes `DCR` and `RD` becomes `RCD`; runs of
/// `C` collapse to one; a leading or trailing `D` is padded with a `C` so
/// every delimiter sits between two cells.
pub fn fill_empties(pattern: &Pattern) -> Pattern {
    use Symbol::{Content, Delim, Row};

    let mut out: Vec<Symbol> = Vec::with_capacity(pattern.len() + 2);
    for &s in pattern.symbols() {
        let last = out.last().copied();
        if s == Content && last == Some(Content) {
            continue;
        }
        let empty_cell = matches!(
            (last, s),
            (Some(Delim), Delim) | (Some(Delim), Row) | (Some(Row), Delim)
        );
        if empty_cell {
            out.push(Content);
        }
        out.push(s);
    }

    if out.first() == Some(&Delim) {
        out.insert(0, Content);
    }
    if out.last() == Some(&Delim) {
        out.push(Content);
    }

    Pattern::from_symbols(out)
}

/// Strip trailing row separators from a pattern.
pub fn strip_trailing(pattern: &Pattern) -> Pattern {
    let mut out = pattern.symbols().to_vec();
    while out.last() == Some(&Symbol::Row) {
        out.pop();
    }
    Pattern::from_symbols(out)
}
