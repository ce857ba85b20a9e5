//! Fixed-capacity blocking buffer shared between a producer and a consumer.
//!
//! One mutex guards the queue; two condition variables (`not_full`,
//! `not_empty`) let each side sleep until the other makes progress. Both
//! waits sit inside a `while` loop so a spurious wakeup just re-checks the
//! predicate. Mutation and notification happen with the lock held; only the
//! condvar wait itself releases it.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

use crate::error::{BufferError, TryPutError};

pub struct BoundedBuffer<T> {
    inner: Mutex<Inner<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

impl<T> BoundedBuffer<T> {
    /// Creates a buffer holding at most `capacity` items. Capacity is fixed
    /// for the lifetime of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-slot buffer can never accept an
    /// item. Configuration validation rejects this earlier.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be at least 1");
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    // A poisoned lock means a thread panicked mid-mutation, so the queue
    // state is suspect. Treat it as fatal.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().expect("buffer lock poisoned")
    }

    /// Appends `item`, blocking while the buffer is at capacity.
    ///
    /// Wakes one waiter blocked in [`take`](Self::take) after inserting.
    /// Returns `Err(BufferError::Closed)` if the buffer is closed before
    /// space appears; the item is dropped in that case.
    pub fn put(&self, item: T) -> Result<(), BufferError> {
        let mut inner = self.lock();
        while inner.items.len() == self.capacity && !inner.closed {
            inner = self.not_full.wait(inner).expect("buffer lock poisoned");
        }
        if inner.closed {
            return Err(BufferError::Closed);
        }
        inner.items.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes and returns the oldest item, blocking while the buffer is
    /// empty.
    ///
    /// Wakes one waiter blocked in [`put`](Self::put) after removing. After
    /// [`close`](Self::close), resident items are still handed out in order;
    /// only once the buffer is drained does this return
    /// `Err(BufferError::Closed)`.
    pub fn take(&self) -> Result<T, BufferError> {
        let mut inner = self.lock();
        while inner.items.is_empty() && !inner.closed {
            inner = self.not_empty.wait(inner).expect("buffer lock poisoned");
        }
        match inner.items.pop_front() {
            Some(item) => {
                self.not_full.notify_one();
                Ok(item)
            }
            None => Err(BufferError::Closed),
        }
    }

    /// Non-blocking insert. Gives the item back on failure.
    pub fn try_put(&self, item: T) -> Result<(), TryPutError<T>> {
        let mut inner = self.lock();
        if inner.closed {
            return Err(TryPutError::Closed(item));
        }
        if inner.items.len() == self.capacity {
            return Err(TryPutError::Full(item));
        }
        inner.items.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Non-blocking remove.
    pub fn try_take(&self) -> Option<T> {
        let mut inner = self.lock();
        let item = inner.items.pop_front()?;
        self.not_full.notify_one();
        Some(item)
    }

    /// Marks the buffer closed and wakes every blocked caller so it can
    /// observe the flag. Items already inside remain takeable.
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lock().items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
