//! Quote-aware merging of pattern symbols.

use super::{Pattern, Symbol};

/// Starting capacity of the quote-span index lists.
const SPAN_INITIAL_CAPACITY: usize = 4;

/// Collapse everything between a matched pair of `Q` symbols into `C`.
///
/// Content inside quotes is not structurally significant, so delimiter and
/// quote look-alikes within a closed span are neutralized. A `Q` immediately
/// followed by another `Q` inside a span is a doubled (escaped) quote marker
/// and is treated as interior content. An unterminated trailing quote is left
/// unmodified: it is structurally informative for dialect scoring.
///
/// The output has the same length as the input, and the function is
/// idempotent.
pub fn merge_quoted(pattern: &Pattern) -> Pattern {
    if pattern.is_empty() {
        return pattern.clone();
    }

    let symbols = pattern.symbols();
    let mut merged = symbols.to_vec();

    // Spans are recorded first and applied after the scan, so false matches
    // inside an unterminated quote cannot corrupt the pass.
    let mut span_left: Vec<usize> = Vec::with_capacity(SPAN_INITIAL_CAPACITY);
    let mut span_right: Vec<usize> = Vec::with_capacity(SPAN_INITIAL_CAPACITY);

    let mut in_quotes = false;
    let mut left = 0;
    let mut i = 0;
    while i < symbols.len() {
        if symbols[i] != Symbol::Quote {
            i += 1;
            continue;
        }

        if !in_quotes {
            in_quotes = true;
            left = i;
            i += 1;
            continue;
        }

        if i + 1 < symbols.len() && symbols[i + 1] == Symbol::Quote {
            // doubled quote marker, skip past it without closing
            i += 1;
        } else {
            span_left.push(left);
            span_right.push(i);
            in_quotes = false;
        }
        i += 1;
    }

    for (&l, &r) in span_left.iter().zip(span_right.iter()) {
        for s in &mut merged[l..=r] {
            *s = Symbol::Content;
        }
    }

    Pattern::from_symbols(merged)
}
