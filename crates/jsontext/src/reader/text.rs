//! The pull reader: tokenizer core plus a character source it refills from.

use crate::error::ReadError;
use crate::options::{Culture, ReaderOptions};
use crate::pool::{AllocPool, SharedPool};
use crate::source::{CharSource, StrSource};
use crate::token::{JsonToken, JsonValue};

use super::core::{Poll, ReaderCore};
use super::{CurrentState, JsonReader};

use std::sync::Arc;

/// A forward-only JSON token reader over a [`CharSource`].
///
/// Each [`JsonReader::read`] call advances one token. Parse faults are
/// recoverable: the offending character is not consumed and the reader stays
/// valid. Source faults propagate unwrapped and reading resumes from the
/// last consumed position once the source recovers.
///
/// ```rust
/// use jsontext::{JsonReader, JsonTextReader, JsonToken};
///
/// let mut reader = JsonTextReader::from_str(r#"{"answer": 42}"#);
/// assert!(reader.read().unwrap());
/// assert_eq!(reader.token_type(), JsonToken::StartObject);
/// assert!(reader.read().unwrap());
/// assert_eq!(reader.token_type(), JsonToken::PropertyName);
/// assert!(reader.read().unwrap());
/// assert_eq!(reader.value().as_i64(), Some(42));
/// assert!(reader.read().unwrap());
/// assert!(!reader.read().unwrap());
/// ```
#[derive(Debug)]
pub struct JsonTextReader<S: CharSource> {
    core: ReaderCore,
    source: Option<S>,
}

impl<'a> JsonTextReader<StrSource<'a>> {
    /// Reads tokens from an in-memory string.
    #[must_use]
    pub fn from_str(text: &'a str) -> Self {
        Self::new(StrSource::new(text))
    }

    /// Reads tokens from an in-memory string with explicit options.
    #[must_use]
    pub fn from_str_with(text: &'a str, options: ReaderOptions) -> Self {
        Self::with_options(StrSource::new(text), options)
    }
}

impl<S: CharSource> JsonTextReader<S> {
    /// Creates a reader with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Creates a reader with explicit options.
    pub fn with_options(source: S, options: ReaderOptions) -> Self {
        Self::with_pool(source, options, Arc::new(AllocPool))
    }

    /// Creates a reader renting its scan buffer from `pool`.
    pub fn with_pool(source: S, options: ReaderOptions, pool: SharedPool) -> Self {
        Self {
            core: ReaderCore::new(options, pool),
            source: Some(source),
        }
    }

    /// Closes the reader: returns the scan buffer to its pool and, when
    /// [`ReaderOptions::close_input`] is set, closes the source.
    pub fn close(&mut self) {
        self.core.mark_closed();
        self.core.release_buffer();
        if let Some(mut source) = self.source.take() {
            if self.core.options.close_input {
                source.close();
            }
        }
    }

    /// The quote character of the most recent string or property name.
    #[must_use]
    pub fn quote_char(&self) -> char {
        self.core.quote_char()
    }
}

impl<S: CharSource> JsonReader for JsonTextReader<S> {
    fn read(&mut self) -> Result<bool, ReadError> {
        loop {
            match self.core.poll_token()? {
                Poll::Token => return Ok(true),
                Poll::Eof => return Ok(false),
                Poll::NeedData => match self.source.as_mut() {
                    Some(source) => self.core.fill_from(source)?,
                    None => self.core.set_end_of_input(),
                },
            }
        }
    }

    fn token_type(&self) -> JsonToken {
        self.core.token_type()
    }

    fn value(&self) -> &JsonValue {
        self.core.value()
    }

    fn depth(&self) -> usize {
        self.core.depth()
    }

    fn path(&self) -> String {
        self.core.path()
    }

    fn line_number(&self) -> usize {
        self.core.line_number()
    }

    fn line_position(&self) -> usize {
        self.core.line_position()
    }

    fn current_state(&self) -> CurrentState {
        self.core.current_state()
    }

    fn culture(&self) -> Culture {
        self.core.options.culture
    }
}

impl<S: CharSource> Drop for JsonTextReader<S> {
    fn drop(&mut self) {
        self.close();
    }
}
