//! Pluggable character-buffer pool.
//!
//! Readers rent their scan buffer from a [`BufferPool`] and return it on
//! close, drop, or fatal error. The default pool simply allocates; a caller
//! with many short-lived readers can supply a recycling implementation.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// A rent/return pool of character buffers.
///
/// Rented buffers are returned unconditionally on every reader exit path, so
/// implementations never leak capacity across a failed parse.
pub trait BufferPool: Send + Sync + Debug {
    /// Rents a buffer with at least `min_size` capacity, length `min_size`.
    fn rent(&self, min_size: usize) -> Vec<char>;

    /// Returns a previously rented buffer.
    fn give_back(&self, buffer: Vec<char>);
}

/// The default pool: plain allocation, returned buffers are dropped.
#[derive(Debug, Default)]
pub struct AllocPool;

impl BufferPool for AllocPool {
    fn rent(&self, min_size: usize) -> Vec<char> {
        vec!['\0'; min_size]
    }

    fn give_back(&self, buffer: Vec<char>) {
        drop(buffer);
    }
}

/// A simple recycling pool keeping returned buffers for reuse.
#[derive(Debug, Default)]
pub struct RecyclingPool {
    free: Mutex<Vec<Vec<char>>>,
}

impl RecyclingPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffers currently held for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the pool mutex is poisoned.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.free.lock().expect("pool poisoned").len()
    }
}

impl BufferPool for RecyclingPool {
    fn rent(&self, min_size: usize) -> Vec<char> {
        let mut free = match self.free.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(pos) = free.iter().position(|b| b.capacity() >= min_size) {
            let mut buf = free.swap_remove(pos);
            buf.resize(min_size, '\0');
            return buf;
        }
        drop(free);
        vec!['\0'; min_size]
    }

    fn give_back(&self, buffer: Vec<char>) {
        let mut free = match self.free.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        free.push(buffer);
    }
}

/// Shared handle to a pool.
pub type SharedPool = Arc<dyn BufferPool>;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{BufferPool, RecyclingPool};

    #[test]
    fn recycles_returned_buffers() {
        let pool = Arc::new(RecyclingPool::new());
        let buf = pool.rent(16);
        assert_eq!(buf.len(), 16);
        pool.give_back(buf);
        assert_eq!(pool.idle(), 1);

        let again = pool.rent(8);
        assert_eq!(pool.idle(), 0);
        assert!(again.capacity() >= 16);
    }
}
