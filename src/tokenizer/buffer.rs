//! Growable field buffer with a hard size limit.

use crate::error::{Result, TokenizerError};

/// Starting capacity of the field buffer, in code points.
const INITIAL_CAPACITY: usize = 4096;

/// One tokenized field: its text and whether it was quoted in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field content, with quote characters stripped when quoted.
    pub text: String,
    /// Whether the field was wrapped in the dialect's quote character.
    pub is_quoted: bool,
}

/// Accumulates the code points of the field currently being read.
///
/// The buffer is cleared, not reallocated, between fields: a logical record
/// spanning several physical lines keeps appending to the same allocation.
#[derive(Debug)]
pub(crate) struct FieldBuffer {
    chars: Vec<char>,
    limit: usize,
}

impl FieldBuffer {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            chars: Vec::with_capacity(INITIAL_CAPACITY),
            limit,
        }
    }

    /// Append one code point, enforcing the field limit.
    pub(crate) fn push(&mut self, c: char) -> Result<()> {
        if self.chars.len() >= self.limit {
            return Err(TokenizerError::FieldLimit { limit: self.limit });
        }
        self.chars.push(c);
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.chars.clear();
    }

    /// Take the buffered field, deciding quoting and stripping quote chars.
    ///
    /// `trailing` marks a forced save at end of input, where an unterminated
    /// leading quote still counts as quoting.
    pub(crate) fn take(&mut self, quote: Option<char>, trailing: bool) -> Field {
        let field = finish_field(&self.chars, quote, trailing);
        self.chars.clear();
        field
    }
}

/// Decide quoting and strip quote characters from a completed field.
fn finish_field(chars: &[char], quote: Option<char>, trailing: bool) -> Field {
    let mut inner = chars;
    let mut is_quoted = false;

    if let Some(q) = quote {
        if inner.len() > 1 && inner[0] == q && inner[inner.len() - 1] == q {
            inner = &inner[1..inner.len() - 1];
            is_quoted = true;
        }
        if trailing && inner.first() == Some(&q) {
            inner = &inner[1..];
            is_quoted = true;
        }
    }

    Field {
        text: inner.iter().collect(),
        is_quoted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str, quote: Option<char>, trailing: bool) -> Field {
        finish_field(&text.chars().collect::<Vec<_>>(), quote, trailing)
    }

    #[test]
    fn test_unquoted_field() {
        let f = field("abc", Some('"'), false);
        assert_eq!(f.text, "abc");
        assert!(!f.is_quoted);
    }

    #[test]
    fn test_quoted_field_stripped() {
        let f = field("\"abc\"", Some('"'), false);
        assert_eq!(f.text, "abc");
        assert!(f.is_quoted);
    }

    #[test]
    fn test_lone_quote_not_stripped() {
        // a single quote char is not a quoted field
        let f = field("\"", Some('"'), false);
        assert_eq!(f.text, "\"");
        assert!(!f.is_quoted);
    }

    #[test]
    fn test_trailing_partial_quote() {
        let f = field("\"abc", Some('"'), true);
        assert_eq!(f.text, "abc");
        assert!(f.is_quoted);
    }

    #[test]
    fn test_trailing_lone_quote() {
        let f = field("\"", Some('"'), true);
        assert_eq!(f.text, "");
        assert!(f.is_quoted);
    }

    #[test]
    fn test_quote_disabled() {
        let f = field("\"abc\"", None, true);
        assert_eq!(f.text, "\"abc\"");
        assert!(!f.is_quoted);
    }

    #[test]
    fn test_buffer_limit() {
        let mut buffer = FieldBuffer::new(3);
        for c in "abc".chars() {
            buffer.push(c).unwrap();
        }
        assert_eq!(
            buffer.push('d'),
            Err(TokenizerError::FieldLimit { limit: 3 })
        );
    }

    #[test]
    fn test_buffer_take_resets() {
        let mut buffer = FieldBuffer::new(16);
        buffer.push('x').unwrap();
        let f = buffer.take(None, false);
        assert_eq!(f.text, "x");
        assert!(buffer.is_empty());
    }
}
