//! `distinct`: drop items equal to one already yielded.
//!
//! [`Distinct`] uses `Eq + Hash` and a hash set. [`DistinctBy`] takes an
//! arbitrary comparer, which cannot be hashed, so it keeps an ordered list of
//! yielded items and scans it linearly for every candidate (O(n²)).

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use lazyseq_core::{Cursor, Latch, Result, Source};

#[derive(Clone)]
pub struct Distinct<S> {
    source: S,
    capacity_hint: usize,
}

impl<S> Distinct<S> {
    pub(crate) fn new(source: S, capacity_hint: usize) -> Self {
        Self {
            source,
            capacity_hint,
        }
    }
}

impl<S> Source for Distinct<S>
where
    S: Source,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Cursor = DistinctCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        DistinctCursor {
            upstream: Latch::new(self.source.cursor()),
            seen: HashSet::with_capacity(self.capacity_hint),
        }
    }
}

pub struct DistinctCursor<C: Cursor> {
    upstream: Latch<C>,
    seen: HashSet<C::Item>,
}

impl<C> Cursor for DistinctCursor<C>
where
    C: Cursor,
    C::Item: Eq + Hash + Clone,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        while let Some(item) = self.upstream.pull()? {
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub struct DistinctBy<S, E> {
    source: S,
    equals: Rc<E>,
}

impl<S, E> DistinctBy<S, E> {
    pub(crate) fn new(source: S, equals: E) -> Self {
        Self {
            source,
            equals: Rc::new(equals),
        }
    }
}

impl<S: Clone, E> Clone for DistinctBy<S, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            equals: Rc::clone(&self.equals),
        }
    }
}

impl<S, E> Source for DistinctBy<S, E>
where
    S: Source,
    S::Item: Clone,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = DistinctByCursor<S::Cursor, E>;

    fn cursor(&self) -> Self::Cursor {
        DistinctByCursor {
            upstream: Latch::new(self.source.cursor()),
            yielded: Vec::new(),
            equals: Rc::clone(&self.equals),
        }
    }
}

pub struct DistinctByCursor<C: Cursor, E> {
    upstream: Latch<C>,
    /// Every item yielded so far, in yield order.
    yielded: Vec<C::Item>,
    equals: Rc<E>,
}

impl<C, E> Cursor for DistinctByCursor<C, E>
where
    C: Cursor,
    C::Item: Clone,
    E: Fn(&C::Item, &C::Item) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        while let Some(item) = self.upstream.pull()? {
            let equals = &self.equals;
            if !self.yielded.iter().any(|prior| equals(&item, prior)) {
                self.yielded.push(item.clone());
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}
