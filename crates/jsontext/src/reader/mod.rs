//! Reading side: the tokenizer core, the pull reader over a character
//! source, the feed-driven reader, and the typed accessors.

mod core;
mod dates;
mod resumable;
mod scan_comment;
mod scan_constructor;
mod scan_literal;
mod scan_number;
mod scan_string;
mod text;
mod typed;

pub use resumable::{CancellationToken, ResumableJsonReader, StreamRead};
pub use text::JsonTextReader;

use crate::error::ReadError;
use crate::options::Culture;
use crate::token::{JsonToken, JsonValue};

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;

/// Outcome of feeding one character to a token scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanStep {
    /// Character accepted; the token continues.
    More,
    /// Character accepted and the token is complete.
    Done,
    /// The token is complete; the character belongs to what follows.
    DoneUnconsumed,
}

/// Where the reader stands between `read` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentState {
    /// Nothing has been read yet, or a new content item may begin.
    Start,
    /// An object was opened and nothing read inside it yet.
    ObjectStart,
    /// Inside an object, between members.
    Object,
    /// A property name was read; its value is next.
    PropertyName,
    /// An array was opened and nothing read inside it yet.
    ArrayStart,
    /// Inside an array, between elements.
    Array,
    /// A constructor was opened and nothing read inside it yet.
    ConstructorStart,
    /// Inside a constructor argument list.
    Constructor,
    /// A complete top-level value has been consumed.
    Finished,
    /// The reader was closed.
    Closed,
    /// The previous `read` reported an error.
    Error,
}

/// The reading surface shared by the pull reader and any other token
/// producer.
///
/// `read` advances one token; the remaining required methods expose the
/// token just read and the reader's position. The `read_as_*` accessors are
/// provided on top of that surface: each advances past comments, maps
/// `null`/`undefined`/end-of-input to `None`, and coerces the token to the
/// target type or fails with a positioned error.
pub trait JsonReader {
    /// Advances to the next token. `Ok(false)` means input is exhausted at a
    /// token boundary.
    fn read(&mut self) -> Result<bool, ReadError>;

    /// The type of the current token.
    fn token_type(&self) -> JsonToken;

    /// The value of the current token.
    fn value(&self) -> &JsonValue;

    /// Nesting depth; zero at the root.
    fn depth(&self) -> usize;

    /// JSONPath-style path to the current token.
    fn path(&self) -> String;

    /// Line of the last consumed character (0 before any input, 1-based).
    fn line_number(&self) -> usize;

    /// Characters consumed on the current line.
    fn line_position(&self) -> usize;

    /// Where the reader stands in the token grammar.
    fn current_state(&self) -> CurrentState;

    /// Number formatting conventions for string coercions.
    fn culture(&self) -> Culture {
        Culture::invariant()
    }

    /// Reads the next content token as a signed 32-bit integer.
    fn read_as_i32(&mut self) -> Result<Option<i32>, ReadError> {
        typed::read_as_i32(self)
    }

    /// Reads the next content token as a double.
    fn read_as_f64(&mut self) -> Result<Option<f64>, ReadError> {
        typed::read_as_f64(self)
    }

    /// Reads the next content token as a fixed-point decimal.
    fn read_as_decimal(&mut self) -> Result<Option<Decimal>, ReadError> {
        typed::read_as_decimal(self)
    }

    /// Reads the next content token as a string, stringifying primitives.
    fn read_as_string(&mut self) -> Result<Option<String>, ReadError> {
        typed::read_as_string(self)
    }

    /// Reads the next content token as a boolean.
    fn read_as_bool(&mut self) -> Result<Option<bool>, ReadError> {
        typed::read_as_bool(self)
    }

    /// Reads the next content token as binary data: a base64 string or an
    /// array of byte-sized integers.
    fn read_as_bytes(&mut self) -> Result<Option<Vec<u8>>, ReadError> {
        typed::read_as_bytes(self)
    }

    /// Reads the next content token as a date-time without offset.
    fn read_as_datetime(&mut self) -> Result<Option<NaiveDateTime>, ReadError> {
        typed::read_as_datetime(self)
    }

    /// Reads the next content token as a date-time with offset.
    fn read_as_datetime_offset(&mut self) -> Result<Option<DateTime<FixedOffset>>, ReadError> {
        typed::read_as_datetime_offset(self)
    }
}
