//! The buffer manager backing a reader's lexer.
//!
//! Holds a pooled character array with a consumed prefix (`pos`), a valid
//! length (`used`), and the invariant `pos <= used <= data.len()`. Refilling
//! either shifts the unconsumed tail to offset 0 or grows the array, doubling
//! up to [`LARGE_BUFFER_LENGTH`] and linearly beyond it. The lexer never
//! re-reads consumed characters, so shifting cannot bisect an in-flight
//! escape sequence.

use crate::pool::SharedPool;

/// Initial rented buffer length.
pub(crate) const INITIAL_BUFFER_LENGTH: usize = 1024;

/// Above this length the buffer stops doubling and grows linearly.
pub(crate) const LARGE_BUFFER_LENGTH: usize = 1 << 20;

#[derive(Debug)]
pub(crate) struct Buffer {
    data: Vec<char>,
    /// Next unconsumed character.
    pos: usize,
    /// Valid length of `data`.
    used: usize,
    pool: SharedPool,
}

impl Buffer {
    pub(crate) fn new(pool: SharedPool, initial: usize) -> Self {
        let data = pool.rent(initial.max(1));
        Self {
            data,
            pos: 0,
            used: 0,
            pool,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        if self.pos < self.used {
            Some(self.data[self.pos])
        } else {
            None
        }
    }

    /// Advances past the character returned by the last `peek`.
    #[inline]
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.pos < self.used);
        self.pos += 1;
    }

    /// Makes room for more input and exposes the writable tail.
    ///
    /// Call `commit` with the number of characters actually written.
    pub(crate) fn writable_tail(&mut self) -> &mut [char] {
        if self.pos == self.used {
            self.pos = 0;
            self.used = 0;
        } else if self.used == self.data.len() {
            if self.pos > 0 {
                // Shift the unconsumed tail to the front.
                self.data.copy_within(self.pos..self.used, 0);
                self.used -= self.pos;
                self.pos = 0;
            } else {
                self.grow();
            }
        }
        &mut self.data[self.used..]
    }

    pub(crate) fn commit(&mut self, written: usize) {
        debug_assert!(self.used + written <= self.data.len());
        self.used += written;
    }

    /// Appends fed text, used by the feed-driven reader variant.
    pub(crate) fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            if self.used == self.data.len() {
                let _ = self.writable_tail();
                if self.used == self.data.len() {
                    self.grow();
                }
            }
            self.data[self.used] = ch;
            self.used += 1;
        }
    }

    fn grow(&mut self) {
        let old_len = self.data.len();
        let new_len = if old_len >= LARGE_BUFFER_LENGTH {
            old_len + LARGE_BUFFER_LENGTH
        } else {
            (old_len * 2).max(INITIAL_BUFFER_LENGTH)
        };
        let mut bigger = self.pool.rent(new_len);
        bigger[..self.used - self.pos].copy_from_slice(&self.data[self.pos..self.used]);
        self.used -= self.pos;
        self.pos = 0;
        let old = core::mem::replace(&mut self.data, bigger);
        self.pool.give_back(old);
    }

    /// Returns the rented buffer to the pool. Idempotent.
    pub(crate) fn release(&mut self) {
        if !self.data.is_empty() || self.data.capacity() > 0 {
            let data = core::mem::take(&mut self.data);
            self.pool.give_back(data);
        }
        self.pos = 0;
        self.used = 0;
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Buffer;
    use crate::pool::AllocPool;

    fn buffer(initial: usize) -> Buffer {
        Buffer::new(Arc::new(AllocPool), initial)
    }

    #[test]
    fn push_and_drain() {
        let mut buf = buffer(4);
        buf.push_str("ab");
        assert_eq!(buf.peek(), Some('a'));
        buf.bump();
        assert_eq!(buf.peek(), Some('b'));
        buf.bump();
        assert_eq!(buf.peek(), None);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut buf = buffer(2);
        buf.push_str("abcdefgh");
        let mut out = String::new();
        while let Some(ch) = buf.peek() {
            out.push(ch);
            buf.bump();
        }
        assert_eq!(out, "abcdefgh");
    }

    #[test]
    fn writable_tail_shifts_consumed_prefix() {
        let mut buf = buffer(4);
        buf.push_str("abcd");
        buf.bump();
        buf.bump();
        let tail = buf.writable_tail();
        assert_eq!(tail.len(), 2);
        tail[0] = 'e';
        buf.commit(1);
        assert_eq!(buf.peek(), Some('c'));
        buf.bump();
        assert_eq!(buf.peek(), Some('d'));
        buf.bump();
        assert_eq!(buf.peek(), Some('e'));
    }
}
