use thiserror::Error;

/// Error type for tokenization and pattern abstraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// A dialect character option was wider than one code point.
    #[error("\"{name}\" must be a 1-character string, got {value:?}")]
    InvalidConfig {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A field grew past the configured field limit.
    #[error("field larger than field limit ({limit})")]
    FieldLimit {
        /// The limit in effect, in code points.
        limit: usize,
    },

    /// A physical line contained a literal NUL code point.
    #[error("line contains NUL byte (did you open the file in text mode?)")]
    NulByte,

    /// Strict mode: something other than a delimiter followed a closing quote.
    #[error("'{delimiter}' expected after '{quote}'")]
    DelimiterExpected {
        /// The configured delimiter.
        delimiter: char,
        /// The configured quote character.
        quote: char,
    },

    /// Strict mode: the line source ran out while a record was unfinished.
    #[error("unexpected end of data")]
    UnexpectedEndOfData,

    /// A character other than CR or LF followed a line terminator within a
    /// single physical line.
    #[error(
        "new-line character seen in unquoted field - \
         do you need to open the file in universal-newline mode?"
    )]
    NewlineInField,

    /// A pattern string contained a character outside the `{R, D, Q, C}`
    /// alphabet.
    #[error("invalid pattern symbol {0:?}")]
    InvalidSymbol(char),
}

/// Result type alias for tokenization operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
