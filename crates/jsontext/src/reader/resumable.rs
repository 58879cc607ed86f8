//! The feed-driven reader: same tokenizer core, caller-supplied chunks.
//!
//! Instead of pulling from a source, the caller feeds text fragments and
//! polls for tokens. When the fed input runs out mid-decision the reader
//! suspends with [`StreamRead::NeedMoreData`]; suspension points are exactly
//! the buffer-refill points of the pull reader, so both produce identical
//! token sequences for identical input.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ParseError;
use crate::options::ReaderOptions;
use crate::pool::{AllocPool, SharedPool};
use crate::token::{JsonToken, JsonValue};

use super::CurrentState;
use super::core::{Poll, ReaderCore};

/// Cooperative cancellation flag, cheap to clone and share across threads.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; observed at the next `read` call.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Outcome of a feed-driven read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRead {
    /// A token is available through the accessors.
    Token(JsonToken),
    /// Fed input ran out mid-decision; feed more and read again.
    NeedMoreData,
    /// Input was finished and all tokens have been produced.
    Finished,
    /// The cancellation token fired.
    Cancelled,
}

/// A [`crate::JsonTextReader`] variant that suspends instead of pulling.
///
/// ```rust
/// use jsontext::{JsonToken, ResumableJsonReader, StreamRead};
///
/// let mut reader = ResumableJsonReader::new();
/// reader.feed("[1,");
/// assert_eq!(reader.read().unwrap(), StreamRead::Token(JsonToken::StartArray));
/// assert_eq!(reader.read().unwrap(), StreamRead::Token(JsonToken::Integer));
/// assert_eq!(reader.read().unwrap(), StreamRead::NeedMoreData);
/// reader.feed("2]");
/// reader.finish();
/// assert_eq!(reader.read().unwrap(), StreamRead::Token(JsonToken::Integer));
/// assert_eq!(reader.read().unwrap(), StreamRead::Token(JsonToken::EndArray));
/// assert_eq!(reader.read().unwrap(), StreamRead::Finished);
/// ```
#[derive(Debug)]
pub struct ResumableJsonReader {
    core: ReaderCore,
    cancellation: CancellationToken,
}

impl Default for ResumableJsonReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumableJsonReader {
    /// Creates a reader with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ReaderOptions::default())
    }

    /// Creates a reader with explicit options.
    #[must_use]
    pub fn with_options(options: ReaderOptions) -> Self {
        Self::with_pool(options, Arc::new(AllocPool))
    }

    /// Creates a reader renting its scan buffer from `pool`.
    #[must_use]
    pub fn with_pool(options: ReaderOptions, pool: SharedPool) -> Self {
        Self {
            core: ReaderCore::new(options, pool),
            cancellation: CancellationToken::new(),
        }
    }

    /// A handle that can cancel this reader from another thread.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Appends a fragment of input text.
    pub fn feed(&mut self, text: &str) {
        self.core.feed(text);
    }

    /// Marks the input complete; pending `NeedMoreData` suspensions resolve
    /// against end of input instead.
    pub fn finish(&mut self) {
        self.core.set_end_of_input();
    }

    /// Advances one token, suspends, or finishes.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for malformed input; the reader stays valid
    /// and the offending character is not consumed.
    pub fn read(&mut self) -> Result<StreamRead, ParseError> {
        if self.cancellation.is_cancelled() {
            return Ok(StreamRead::Cancelled);
        }
        Ok(match self.core.poll_token()? {
            Poll::Token => StreamRead::Token(self.core.token_type()),
            Poll::NeedData => StreamRead::NeedMoreData,
            Poll::Eof => StreamRead::Finished,
        })
    }

    /// The type of the current token.
    #[must_use]
    pub fn token_type(&self) -> JsonToken {
        self.core.token_type()
    }

    /// The value of the current token.
    #[must_use]
    pub fn value(&self) -> &JsonValue {
        self.core.value()
    }

    /// Nesting depth; zero at the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.core.depth()
    }

    /// JSONPath-style path to the current token.
    #[must_use]
    pub fn path(&self) -> String {
        self.core.path()
    }

    /// Line of the last consumed character.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.core.line_number()
    }

    /// Characters consumed on the current line.
    #[must_use]
    pub fn line_position(&self) -> usize {
        self.core.line_position()
    }

    /// Where the reader stands in the token grammar.
    #[must_use]
    pub fn current_state(&self) -> CurrentState {
        self.core.current_state()
    }

    /// Returns the scan buffer to its pool.
    pub fn close(&mut self) {
        self.core.mark_closed();
        self.core.release_buffer();
    }
}
