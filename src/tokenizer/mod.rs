//! The LL(2) field tokenizer.
//!
//! A 9-state automaton turns a stream of physical lines into logical
//! records of fields, honoring quoting, escaping, doubled quotes and CR/LF
//! variants. Unlike an LL(1) CSV reader it never needs a doubled-quote flag:
//! one character of lookahead distinguishes a doubled quote from a closing
//! one, which is what makes the same configuration usable for dialect
//! detection over messy files.

mod buffer;
mod reader;
mod state;

pub use buffer::Field;
pub use reader::{DEFAULT_FIELD_LIMIT, Row, SplitLines, Tokenizer, TokenizerBuilder, split_lines};
pub use state::ParserState;

use crate::dialect::Dialect;
use crate::error::Result;

/// Tokenize an in-memory buffer, returning rows of plain text fields.
pub fn parse_string(data: &str, dialect: &Dialect) -> Result<Vec<Vec<String>>> {
    let rows = parse_string_quoted(data, dialect)?;
    Ok(rows.into_iter().map(Row::into_texts).collect())
}

/// Tokenize an in-memory buffer, returning rows that keep the quoted flag
/// of each field.
pub fn parse_string_quoted(data: &str, dialect: &Dialect) -> Result<Vec<Row>> {
    let mut builder = TokenizerBuilder::new();
    builder.dialect(*dialect);
    builder.from_lines(split_lines(data)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string() {
        let dialect = Dialect::from_options(",", "\"", "").unwrap();
        let rows = parse_string("a,\"b,c\",d\n", &dialect).unwrap();
        assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_parse_string_quoted() {
        let dialect = Dialect::from_options(",", "\"", "").unwrap();
        let rows = parse_string_quoted("a,\"b,c\",d\n", &dialect).unwrap();
        let quoted: Vec<bool> = rows[0].iter().map(|f| f.is_quoted).collect();
        assert_eq!(quoted, [false, true, false]);
    }

    #[test]
    fn test_parse_string_empty() {
        let dialect = Dialect::default();
        assert_eq!(parse_string("", &dialect).unwrap(), Vec::<Vec<String>>::new());
    }
}
