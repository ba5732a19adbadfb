//! `join`: correlate outer items with the first matching inner item.
//!
//! Nested-loop join. Every outer item scans a fresh cursor over the inner
//! source from its start and stops at the first key match, so each outer item
//! yields at most one result. Outer items without a match are dropped.

use std::rc::Rc;

use lazyseq_core::{Cursor, Latch, Result, Source};

/// Key selectors, result selector, and key comparer for one join.
pub struct JoinFns<KO, KI, R, E> {
    pub outer_key: KO,
    pub inner_key: KI,
    pub result: R,
    pub equals: E,
}

pub struct Join<S, I, KO, KI, R, E> {
    outer: S,
    inner: Rc<I>,
    fns: Rc<JoinFns<KO, KI, R, E>>,
}

impl<S, I, KO, KI, R, E> Join<S, I, KO, KI, R, E> {
    pub(crate) fn new(outer: S, inner: I, fns: JoinFns<KO, KI, R, E>) -> Self {
        Self {
            outer,
            inner: Rc::new(inner),
            fns: Rc::new(fns),
        }
    }
}

impl<S: Clone, I, KO, KI, R, E> Clone for Join<S, I, KO, KI, R, E> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: Rc::clone(&self.inner),
            fns: Rc::clone(&self.fns),
        }
    }
}

impl<S, I, KO, KI, R, E, K1, K2, U> Source for Join<S, I, KO, KI, R, E>
where
    S: Source,
    I: Source,
    KO: Fn(&S::Item) -> K1,
    KI: Fn(&I::Item) -> K2,
    R: Fn(S::Item, I::Item) -> U,
    E: Fn(&K1, &K2) -> bool,
{
    type Item = U;
    type Cursor = JoinCursor<S::Cursor, I, KO, KI, R, E>;

    fn cursor(&self) -> Self::Cursor {
        JoinCursor {
            outer: Latch::new(self.outer.cursor()),
            inner: Rc::clone(&self.inner),
            fns: Rc::clone(&self.fns),
        }
    }
}

pub struct JoinCursor<C, I, KO, KI, R, E> {
    outer: Latch<C>,
    inner: Rc<I>,
    fns: Rc<JoinFns<KO, KI, R, E>>,
}

impl<C, I, KO, KI, R, E, K1, K2> JoinCursor<C, I, KO, KI, R, E>
where
    C: Cursor,
    I: Source,
    KO: Fn(&C::Item) -> K1,
    KI: Fn(&I::Item) -> K2,
    E: Fn(&K1, &K2) -> bool,
{
    /// Scan a fresh inner cursor for the first item whose key matches.
    fn first_match(&self, key: &K1) -> Result<Option<I::Item>> {
        let mut candidates = Latch::new(self.inner.cursor());
        while let Some(candidate) = candidates.pull()? {
            if (self.fns.equals)(key, &(self.fns.inner_key)(&candidate)) {
                candidates.release();
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

impl<C, I, KO, KI, R, E, K1, K2, U> Cursor for JoinCursor<C, I, KO, KI, R, E>
where
    C: Cursor,
    I: Source,
    KO: Fn(&C::Item) -> K1,
    KI: Fn(&I::Item) -> K2,
    R: Fn(C::Item, I::Item) -> U,
    E: Fn(&K1, &K2) -> bool,
{
    type Item = U;

    fn pull(&mut self) -> Result<Option<U>> {
        while let Some(item) = self.outer.pull()? {
            let key = (self.fns.outer_key)(&item);
            match self.first_match(&key) {
                Ok(Some(matched)) => return Ok(Some((self.fns.result)(item, matched))),
                Ok(None) => {}
                Err(e) => {
                    self.outer.release();
                    return Err(e);
                }
            }
        }
        Ok(None)
    }

    fn release(&mut self) {
        self.outer.release();
    }
}
