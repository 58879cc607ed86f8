//! The input boundary: a forward-only character source.

use std::io;

/// A forward-only stream of characters feeding a reader.
///
/// Implementations fill as much of `out` as they can and return the number of
/// characters written; `0` signals end of input. Faults propagate unwrapped
/// through [`crate::ReadError::Source`], and a failed call must not consume
/// input: a later retry continues from the same position.
pub trait CharSource {
    /// Reads up to `out.len()` characters into `out`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O fault, leaving the unread input intact.
    fn read_chars(&mut self, out: &mut [char]) -> io::Result<usize>;

    /// Releases the underlying resource. Called by the reader when
    /// `close_input` is set.
    fn close(&mut self) {}
}

/// A source over an in-memory string slice.
#[derive(Debug)]
pub struct StrSource<'a> {
    rest: &'a str,
}

impl<'a> StrSource<'a> {
    /// Creates a source reading `text` from the beginning.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl CharSource for StrSource<'_> {
    fn read_chars(&mut self, out: &mut [char]) -> io::Result<usize> {
        let mut n = 0;
        let mut bytes = 0;
        for (slot, ch) in out.iter_mut().zip(self.rest.chars()) {
            *slot = ch;
            bytes += ch.len_utf8();
            n += 1;
        }
        self.rest = &self.rest[bytes..];
        Ok(n)
    }
}
