//! `where`: keep the items a predicate accepts.

use std::rc::Rc;

use lazyseq_core::{Cursor, Latch, Result, Source};

pub struct Filter<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            upstream: Latch::new(self.source.cursor()),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

pub struct FilterCursor<C, P> {
    upstream: Latch<C>,
    predicate: Rc<P>,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        while let Some(item) = self.upstream.pull()? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}
