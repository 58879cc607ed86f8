//! Streaming, forward-only JSON text reading and writing.
//!
//! [`JsonTextReader`] tokenizes JSON one token per `read` call, tracking the
//! line, position, and JSONPath of everything it produces. It accepts the
//! lenient dialect common in hand-written JSON: comments, single-quoted
//! strings, unquoted property names, `new Name(...)` constructors, hex and
//! octal integers, and `NaN`/`Infinity`/`undefined` literals. Malformed
//! input fails with a positioned, recoverable error; integer literals that
//! overflow 64 bits promote to arbitrary precision instead of failing.
//!
//! [`JsonTextWriter`] mirrors the reader: the same token vocabulary, the
//! same state machine run in reverse, validating every token against the
//! grammar before writing it.
//!
//! [`ResumableJsonReader`] is the push-mode variant: callers feed text
//! fragments and poll, and the reader suspends mid-token when input runs
//! out, producing the same token sequence the pull reader would.
//!
//! ```rust
//! use jsontext::{JsonReader, JsonTextReader, JsonToken};
//!
//! let mut reader = JsonTextReader::from_str(
//!     "{ // lenient
//!       name: 'value', sizes: [1, 2e1, 0x1F] }",
//! );
//! let mut tokens = Vec::new();
//! while reader.read().unwrap() {
//!     tokens.push(reader.token_type());
//! }
//! assert_eq!(tokens[0], JsonToken::StartObject);
//! assert_eq!(tokens[1], JsonToken::Comment);
//! assert!(tokens.contains(&JsonToken::PropertyName));
//! ```

mod buffer;
mod error;
mod escape;
mod frames;
mod options;
mod pool;
mod reader;
mod source;
mod token;
mod writer;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError, ReadError, WriteError};
pub use frames::ContainerKind;
pub use options::{
    Culture, DateParseHandling, FloatParseHandling, Formatting, ReaderOptions, WriterOptions,
};
pub use pool::{AllocPool, BufferPool, RecyclingPool, SharedPool};
pub use reader::{
    CancellationToken, CurrentState, JsonReader, JsonTextReader, ResumableJsonReader, StreamRead,
};
pub use source::{CharSource, StrSource};
pub use token::{JsonToken, JsonValue};
pub use writer::{JsonTextWriter, JsonWriter};
