//! The LL(2) field-tokenizing state machine.
//!
//! The automaton consumes one character at a time together with one
//! character of lookahead. `None` stands for the end-of-line sentinel; a
//! literal NUL never reaches the automaton (the reader rejects it first).

use super::buffer::{Field, FieldBuffer};
use crate::dialect::Dialect;
use crate::error::{Result, TokenizerError};

/// The automaton states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserState {
    /// Before any field of a new record.
    StartRecord,
    /// About to read the first character of a field.
    StartField,
    /// The character after an escape, outside quotes.
    EscapedChar,
    /// Continuation after an escaped line break.
    AfterEscapedCrnl,
    /// In the middle of an unquoted field.
    InField,
    /// Inside a quoted field.
    InQuotedField,
    /// The character after an escape, inside quotes.
    EscapeInQuotedField,
    /// Just saw a possibly doubled quote inside a quoted field.
    QuoteInQuotedField,
    /// Swallowing the rest of a line terminator.
    EatCrnl,
}

/// The tokenizer core: dispatches characters against the current state and
/// accumulates the fields of the record in flight.
#[derive(Debug)]
pub(crate) struct Engine {
    dialect: Dialect,
    strict: bool,
    state: ParserState,
    field: FieldBuffer,
    fields: Vec<Field>,
    doublequote: bool,
}

impl Engine {
    pub(crate) fn new(dialect: Dialect, field_limit: usize, strict: bool) -> Self {
        Self {
            dialect,
            strict,
            state: ParserState::StartRecord,
            field: FieldBuffer::new(field_limit),
            fields: Vec::new(),
            doublequote: false,
        }
    }

    pub(crate) fn state(&self) -> ParserState {
        self.state
    }

    pub(crate) fn doublequote_seen(&self) -> bool {
        self.doublequote
    }

    pub(crate) fn field_in_progress(&self) -> bool {
        !self.field.is_empty()
    }

    /// Reset for the next record. Buffer capacity is retained.
    pub(crate) fn reset(&mut self) {
        self.fields.clear();
        self.field.clear();
        self.state = ParserState::StartRecord;
    }

    /// Hand out the fields of the completed record.
    pub(crate) fn take_fields(&mut self) -> Vec<Field> {
        std::mem::take(&mut self.fields)
    }

    /// Forced save of a partial field at end of input.
    pub(crate) fn save_trailing_field(&mut self) {
        self.save_field(true);
    }

    fn save_field(&mut self, trailing: bool) {
        let field = self.field.take(self.dialect.quote, trailing);
        self.fields.push(field);
    }

    /// Dispatch one input character `u` with lookahead `v`.
    pub(crate) fn process_char(&mut self, u: Option<char>, v: Option<char>) -> Result<()> {
        match self.state {
            ParserState::StartRecord => self.start_record(u, v),
            ParserState::StartField => self.start_field(u),
            ParserState::EscapedChar => self.escaped_char(u),
            ParserState::AfterEscapedCrnl => self.after_escaped_crnl(u),
            ParserState::InField => self.in_field(u),
            ParserState::InQuotedField => self.in_quoted_field(u, v),
            ParserState::EscapeInQuotedField => self.escape_in_quoted_field(u),
            ParserState::QuoteInQuotedField => self.quote_in_quoted_field(u),
            ParserState::EatCrnl => self.eat_crnl(u),
        }
    }

    fn start_record(&mut self, u: Option<char>, _v: Option<char>) -> Result<()> {
        match u {
            None => Ok(()),
            Some('\r' | '\n') => {
                self.state = ParserState::EatCrnl;
                Ok(())
            }
            Some(_) => {
                // re-dispatch the same character against the successor state
                self.state = ParserState::StartField;
                self.start_field(u)
            }
        }
    }

    fn start_field(&mut self, u: Option<char>) -> Result<()> {
        match u {
            None | Some('\r' | '\n') => {
                self.save_field(false);
                self.state = if u.is_none() {
                    ParserState::StartRecord
                } else {
                    ParserState::EatCrnl
                };
                Ok(())
            }
            Some(c) if self.dialect.is_quote(c) => {
                self.field.push(c)?;
                self.state = ParserState::InQuotedField;
                Ok(())
            }
            Some(c) if self.dialect.is_escape(c) => {
                self.state = ParserState::EscapedChar;
                Ok(())
            }
            Some(c) if self.dialect.is_delimiter(c) => {
                self.save_field(false);
                Ok(())
            }
            Some(c) => {
                self.field.push(c)?;
                self.state = ParserState::InField;
                Ok(())
            }
        }
    }

    fn escaped_char(&mut self, u: Option<char>) -> Result<()> {
        if let Some(c) = u
            && (c == '\r' || c == '\n')
        {
            self.field.push(c)?;
            self.state = ParserState::AfterEscapedCrnl;
            return Ok(());
        }
        if let Some(c) = u {
            // the escape only applies to delimiter, quote and escape chars;
            // anything else keeps the escape character itself
            if !self.dialect.is_delimiter(c)
                && !self.dialect.is_escape(c)
                && !self.dialect.is_quote(c)
                && let Some(esc) = self.dialect.escape
            {
                self.field.push(esc)?;
            }
            self.field.push(c)?;
        }
        self.state = ParserState::InField;
        Ok(())
    }

    fn after_escaped_crnl(&mut self, u: Option<char>) -> Result<()> {
        if u.is_none() {
            // wait for the next physical line
            return Ok(());
        }
        self.state = ParserState::InField;
        self.in_field(u)
    }

    fn in_field(&mut self, u: Option<char>) -> Result<()> {
        match u {
            None | Some('\r' | '\n') => {
                self.save_field(false);
                self.state = if u.is_none() {
                    ParserState::StartRecord
                } else {
                    ParserState::EatCrnl
                };
                Ok(())
            }
            Some(c) if self.dialect.is_escape(c) => {
                self.state = ParserState::EscapedChar;
                Ok(())
            }
            Some(c) if self.dialect.is_quote(c) => {
                self.field.push(c)?;
                self.state = ParserState::InQuotedField;
                Ok(())
            }
            Some(c) if self.dialect.is_delimiter(c) => {
                self.save_field(false);
                self.state = ParserState::StartField;
                Ok(())
            }
            Some(c) => self.field.push(c),
        }
    }

    fn in_quoted_field(&mut self, u: Option<char>, v: Option<char>) -> Result<()> {
        match u {
            None => Ok(()),
            Some(c) if self.dialect.is_escape(c) => {
                self.state = ParserState::EscapeInQuotedField;
                Ok(())
            }
            Some(c) if self.dialect.is_quote(c) => {
                if let Some(vc) = v
                    && self.dialect.is_quote(vc)
                {
                    self.doublequote = true;
                    self.state = ParserState::QuoteInQuotedField;
                    Ok(())
                } else if self.strict {
                    Err(self.delimiter_expected())
                } else {
                    self.field.push(c)?;
                    self.state = ParserState::InField;
                    Ok(())
                }
            }
            Some(c) => self.field.push(c),
        }
    }

    fn escape_in_quoted_field(&mut self, u: Option<char>) -> Result<()> {
        if let Some(c) = u {
            if !self.dialect.is_delimiter(c)
                && !self.dialect.is_escape(c)
                && !self.dialect.is_quote(c)
                && let Some(esc) = self.dialect.escape
            {
                self.field.push(esc)?;
            }
            self.field.push(c)?;
        } else {
            // escaped end of physical line: kept as an embedded line feed
            self.field.push('\n')?;
        }
        self.state = ParserState::InQuotedField;
        Ok(())
    }

    fn quote_in_quoted_field(&mut self, u: Option<char>) -> Result<()> {
        match u {
            Some(c) if self.dialect.is_quote(c) => {
                self.field.push(c)?;
                self.state = ParserState::InQuotedField;
                Ok(())
            }
            Some(c) if self.dialect.is_delimiter(c) => {
                self.save_field(false);
                self.state = ParserState::StartField;
                Ok(())
            }
            None | Some('\r' | '\n') => {
                self.save_field(false);
                self.state = if u.is_none() {
                    ParserState::StartRecord
                } else {
                    ParserState::EatCrnl
                };
                Ok(())
            }
            Some(c) if !self.strict => {
                self.field.push(c)?;
                self.state = ParserState::InField;
                Ok(())
            }
            Some(_) => Err(self.delimiter_expected()),
        }
    }

    fn eat_crnl(&mut self, u: Option<char>) -> Result<()> {
        match u {
            Some('\r' | '\n') => Ok(()),
            None => {
                self.state = ParserState::StartRecord;
                Ok(())
            }
            Some(_) => Err(TokenizerError::NewlineInField),
        }
    }

    fn delimiter_expected(&self) -> TokenizerError {
        TokenizerError::DelimiterExpected {
            delimiter: self.dialect.delimiter.unwrap_or('\0'),
            quote: self.dialect.quote.unwrap_or('\0'),
        }
    }
}
