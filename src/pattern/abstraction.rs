//! Character-class abstraction of raw delimited text.

use super::{Pattern, Symbol};
use crate::dialect::Dialect;

/// Map a text buffer to its structural pattern.
///
/// Scans code points left to right and classifies each as a row separator
/// (`R`), delimiter (`D`), quote (`Q`) or content (`C`). Runs of row
/// separators and of ordinary content collapse into a single symbol. An
/// escape character suppresses the structural meaning of the next delimiter
/// or quote, turning it into content; escaping anything else has no effect
/// beyond consuming the escape.
///
/// No field semantics are applied here: quotes are not stripped and rows are
/// not split. Quoted spans are neutralized later by
/// [`merge_quoted`](super::merge_quoted).
pub fn base_abstraction(text: &str, dialect: &Dialect) -> Pattern {
    let mut pattern = Pattern::new();
    let mut escape_next = false;

    for s in text.chars() {
        if s == '\r' || s == '\n' {
            if pattern.last() != Some(Symbol::Row) {
                pattern.push(Symbol::Row);
            }
        } else if dialect.is_delimiter(s) {
            if escape_next {
                pattern.push(Symbol::Content);
                escape_next = false;
            } else {
                pattern.push(Symbol::Delim);
            }
        } else if dialect.is_quote(s) {
            if escape_next {
                pattern.push(Symbol::Content);
                escape_next = false;
            } else {
                pattern.push(Symbol::Quote);
            }
        } else if dialect.is_escape(s) {
            if escape_next {
                // the escape character itself was escaped
                if pattern.last() != Some(Symbol::Content) {
                    pattern.push(Symbol::Content);
                }
                escape_next = false;
            } else {
                escape_next = true;
            }
        } else {
            if escape_next {
                escape_next = false;
            }
            if pattern.last() != Some(Symbol::Content) {
                pattern.push(Symbol::Content);
            }
        }
    }

    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialect(delimiter: &str, quote: &str, escape: &str) -> Dialect {
        Dialect::from_options(delimiter, quote, escape).unwrap()
    }

    #[test]
    fn test_simple_row() {
        let pattern = base_abstraction("a,b,c", &dialect(",", "", ""));
        assert_eq!(pattern.to_string(), "CDCDC");
    }

    #[test]
    fn test_content_runs_collapse() {
        let pattern = base_abstraction("abc,defg", &dialect(",", "", ""));
        assert_eq!(pattern.to_string(), "CDC");
    }

    #[test]
    fn test_row_separator_runs_collapse() {
        let pattern = base_abstraction("a\r\nb\n\nc", &dialect(",", "", ""));
        assert_eq!(pattern.to_string(), "CRCRC");
    }

    #[test]
    fn test_leading_row_separator() {
        // the run-collapse guard must hold on an empty pattern too
        let pattern = base_abstraction("\na", &dialect(",", "", ""));
        assert_eq!(pattern.to_string(), "RC");
    }

    #[test]
    fn test_quotes_kept_raw() {
        let pattern = base_abstraction("a,\"b,c\"", &dialect(",", "\"", ""));
        assert_eq!(pattern.to_string(), "CDQCDCQ");
    }

    #[test]
    fn test_escaped_delimiter_is_content() {
        // the escaped delimiter becomes its own C, not merged with a run
        let pattern = base_abstraction("a\\,b", &dialect(",", "", "\\"));
        assert_eq!(pattern.to_string(), "CC");
    }

    #[test]
    fn test_escaped_quote_is_content() {
        let pattern = base_abstraction("\\\"a\"", &dialect(",", "\"", "\\"));
        assert_eq!(pattern.to_string(), "CQ");
    }

    #[test]
    fn test_escaped_escape_collapses() {
        let pattern = base_abstraction("a\\\\b", &dialect(",", "", "\\"));
        assert_eq!(pattern.to_string(), "C");
    }

    #[test]
    fn test_disabled_characters_never_match() {
        let pattern = base_abstraction("a,b\"c\\d", &dialect("", "", ""));
        assert_eq!(pattern.to_string(), "C");
    }

    #[test]
    fn test_trailing_escape_emits_nothing() {
        let pattern = base_abstraction("a\\", &dialect(",", "", "\\"));
        assert_eq!(pattern.to_string(), "C");
    }

    #[test]
    fn test_empty_input() {
        let pattern = base_abstraction("", &dialect(",", "\"", "\\"));
        assert!(pattern.is_empty());
    }
}
