//! Positional and predicate-based slicing: `skip`, `skip_while`, `take`,
//! `take_while`.

use std::rc::Rc;

use lazyseq_core::{Cursor, Latch, Result, Source};

#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Source> Source for Skip<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor {
            upstream: Latch::new(self.source.cursor()),
            remaining: self.count,
        }
    }
}

pub struct SkipCursor<C> {
    upstream: Latch<C>,
    remaining: usize,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        while self.remaining > 0 {
            if self.upstream.pull()?.is_none() {
                return Ok(None);
            }
            self.remaining -= 1;
        }
        self.upstream.pull()
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub struct SkipWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for SkipWhile<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Source for SkipWhile<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = SkipWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        SkipWhileCursor {
            upstream: Latch::new(self.source.cursor()),
            predicate: Rc::clone(&self.predicate),
            skipping: true,
        }
    }
}

pub struct SkipWhileCursor<C, P> {
    upstream: Latch<C>,
    predicate: Rc<P>,
    skipping: bool,
}

impl<C, P> Cursor for SkipWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        if !self.skipping {
            return self.upstream.pull();
        }
        while let Some(item) = self.upstream.pull()? {
            if !(self.predicate)(&item) {
                self.skipping = false;
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Source> Source for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            upstream: Latch::new(self.source.cursor()),
            remaining: self.count,
        }
    }
}

/// Never pulls past the requested count. The upstream is released as soon as
/// the count is reached, so a consumer that stops on the last item leaves
/// nothing dangling.
pub struct TakeCursor<C> {
    upstream: Latch<C>,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        if self.remaining == 0 {
            self.upstream.release();
            return Ok(None);
        }
        let item = self.upstream.pull()?;
        if item.is_some() {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.upstream.release();
            }
        }
        Ok(item)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}

pub struct TakeWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for TakeWhile<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Source for TakeWhile<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            upstream: Latch::new(self.source.cursor()),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

pub struct TakeWhileCursor<C, P> {
    upstream: Latch<C>,
    predicate: Rc<P>,
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        match self.upstream.pull()? {
            Some(item) if (self.predicate)(&item) => Ok(Some(item)),
            Some(_) => {
                // The failing item is consumed and dropped.
                self.upstream.release();
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}
