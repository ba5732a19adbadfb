//! The pull protocol.
//!
//! A cursor is either ACTIVE or DONE. DONE is terminal: once a cursor has
//! reported exhaustion (or an error) every later pull reports `Ok(None)`.
//! Composed operators do not get this for free, so each operator keeps its
//! upstream in a [`Latch`], which enforces it at every layer.

use std::iter::FusedIterator;

use crate::error::Result;

/// Single-use, stateful handle over a sequence of values.
pub trait Cursor {
    type Item;

    /// `Ok(Some(v))` for a value, `Ok(None)` once exhausted, `Err(_)` for a
    /// failure discovered while pulling.
    fn pull(&mut self) -> Result<Option<Self::Item>>;

    /// Early-release hook for a cursor abandoned before exhaustion.
    ///
    /// Layered cursors must forward this to every cursor they own. After
    /// `release` the cursor reports done.
    fn release(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<Self::Item>> {
        (**self).pull()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Holds an upstream cursor and latches DONE.
///
/// Exhaustion or an error drops the wrapped cursor; `release` forwards the
/// hook first. Either way later pulls return `Ok(None)` without touching the
/// upstream again.
pub struct Latch<C> {
    inner: Option<C>,
}

impl<C: Cursor> Latch<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            inner: Some(cursor),
        }
    }

    /// A latch that is already done.
    pub fn done() -> Self {
        Self { inner: None }
    }

    pub fn is_done(&self) -> bool {
        self.inner.is_none()
    }

    pub fn pull(&mut self) -> Result<Option<C::Item>> {
        let Some(cursor) = self.inner.as_mut() else {
            return Ok(None);
        };
        match cursor.pull() {
            Ok(Some(item)) => Ok(Some(item)),
            settled => {
                self.inner = None;
                settled
            }
        }
    }

    /// Forward the release hook (if still active) and latch done.
    pub fn release(&mut self) {
        if let Some(mut cursor) = self.inner.take() {
            cursor.release();
        }
    }
}

/// `Iterator` adapter over a cursor, used by `for` loops.
///
/// Yields `Result<T>` so lazily discovered failures surface at the pull that
/// hit them. Dropping the iterator before exhaustion releases the cursor.
pub struct Iter<C: Cursor> {
    cursor: Latch<C>,
}

impl<C: Cursor> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor: Latch::new(cursor),
        }
    }

    /// Check if the underlying cursor has finished.
    pub fn is_done(&self) -> bool {
        self.cursor.is_done()
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull().transpose()
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

impl<C: Cursor> Drop for Iter<C> {
    fn drop(&mut self) {
        self.cursor.release();
    }
}
