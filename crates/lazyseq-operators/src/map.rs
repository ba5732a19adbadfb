//! `select`: one-to-one projection.

use std::rc::Rc;

use lazyseq_core::{Cursor, Latch, Result, Source};

pub struct Select<S, F> {
    source: S,
    selector: Rc<F>,
}

impl<S, F> Select<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self {
            source,
            selector: Rc::new(selector),
        }
    }
}

impl<S: Clone, F> Clone for Select<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            selector: Rc::clone(&self.selector),
        }
    }
}

impl<S, F, U> Source for Select<S, F>
where
    S: Source,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor = SelectCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        SelectCursor {
            upstream: Latch::new(self.source.cursor()),
            selector: Rc::clone(&self.selector),
        }
    }
}

pub struct SelectCursor<C, F> {
    upstream: Latch<C>,
    selector: Rc<F>,
}

impl<C, F, U> Cursor for SelectCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Result<Option<U>> {
        Ok(self.upstream.pull()?.map(|item| (self.selector)(item)))
    }

    fn release(&mut self) {
        self.upstream.release();
    }
}
