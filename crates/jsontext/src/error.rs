//! Error taxonomy for parse faults, source faults, and writer misuse.

use core::fmt;

use thiserror::Error;

use crate::token::JsonToken;

/// The fault behind a [`ParseError`], with the exact human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Additional text encountered after finished reading JSON content: {0}.")]
    AdditionalText(char),
    #[error("The reader's MaxDepth of {0} has been exceeded.")]
    MaxDepthExceeded(u32),
    #[error("JSON integer {0} is too large or small for an Int32.")]
    IntegerTooLargeForInt32(String),
    #[error("Input string '{0}' is not a valid integer.")]
    InvalidInteger(String),
    #[error("Input string '{0}' is not a valid number.")]
    InvalidNumber(String),
    #[error("Input string '{0}' is not a valid decimal.")]
    InvalidDecimal(String),
    #[error("Input string '{0}' is not valid base64.")]
    InvalidBase64(String),
    #[error("Unexpected character encountered while parsing number: {0}.")]
    UnexpectedCharacterNumber(char),
    #[error("Unexpected character encountered while parsing value: {0}.")]
    UnexpectedCharacterValue(char),
    #[error("After parsing a value an unexpected character was encountered: {0}.")]
    AfterParsingValue(char),
    #[error("Unexpected end when reading JSON.")]
    UnexpectedEnd,
    #[error("Unterminated string. Expected delimiter: {0}.")]
    UnterminatedString(char),
    #[error("Unexpected end while parsing Unicode escape sequence.")]
    UnexpectedEndUnicodeEscape,
    #[error("Invalid Unicode escape sequence: \\u{0}.")]
    InvalidUnicodeEscape(String),
    #[error("Bad JSON escape sequence: \\{0}.")]
    BadEscapeSequence(char),
    #[error("Unexpected end while parsing unquoted property name.")]
    UnexpectedEndUnquotedName,
    #[error("Unexpected end while parsing comment.")]
    UnexpectedEndComment,
    #[error("Error parsing comment. Expected: *, got {0}.")]
    CommentExpectedStar(char),
    #[error("Unexpected character while parsing constructor: {0}.")]
    UnexpectedCharacterConstructor(char),
    #[error("Unexpected end while parsing constructor.")]
    UnexpectedEndConstructor,
    #[error("Error reading {target}. Unexpected token: {token}.")]
    UnexpectedToken {
        /// The requested coercion target, e.g. `integer` or `bytes`.
        target: &'static str,
        /// The token that could not be coerced.
        token: JsonToken,
    },
    #[error("Error parsing {0} value.")]
    InvalidLiteral(&'static str),
    #[error("Cannot read NaN value.")]
    CannotReadNaN,
    #[error("Cannot read Infinity value.")]
    CannotReadInfinity,
    #[error("Invalid character after parsing property name. Expected ':' but got: {0}.")]
    InvalidCharacterAfterPropertyName(char),
    #[error("Invalid property identifier character: {0}.")]
    InvalidPropertyIdentifierCharacter(char),
    #[error("Invalid JavaScript property identifier character: {0}.")]
    InvalidJavaScriptPropertyIdentifierCharacter(char),
    #[error("Could not convert string to boolean: {0}.")]
    StringNotBoolean(String),
    #[error("Could not convert string to DateTime: {0}.")]
    StringNotDateTime(String),
}

/// A recoverable parse or coercion fault.
///
/// Carries the location of the fault: the [`crate::JsonReader::path`] of the
/// token being read and the 1-based line/position of the offending character.
/// The reader remains valid for further reads after returning one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Location within the document tree, e.g. `a.b[0]`.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based character position within the line.
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Path '{}', line {}, position {}.",
            self.kind, self.path, self.line, self.position
        )
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Any fault surfaced by a read operation.
///
/// Source faults are the underlying I/O error, unwrapped; they do not corrupt
/// the reader, and reads continue from the last consumed position once the
/// source recovers.
#[derive(Error, Debug)]
pub enum ReadError {
    /// A recoverable parse fault.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A fault from the underlying character source.
    #[error(transparent)]
    Source(#[from] std::io::Error),
}

impl ReadError {
    /// The parse fault, if this is one.
    #[must_use]
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Source(_) => None,
        }
    }
}

/// A writer misuse fault: the requested token is illegal in the writer's
/// current state. Classified separately from reader faults.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WriteError {
    #[error("Token {token} in state {state} would result in an invalid JSON object. Path '{path}'.")]
    InvalidState {
        /// The token that was attempted.
        token: JsonToken,
        /// The writer state it was attempted in.
        state: &'static str,
        /// Location within the document being written.
        path: String,
    },
    #[error("No token to close. Path '{path}'.")]
    NothingToClose {
        /// Location within the document being written.
        path: String,
    },
    /// The underlying text sink failed.
    #[error(transparent)]
    Sink(#[from] fmt::Error),
}
