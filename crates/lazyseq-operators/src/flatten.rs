//! `select_many`: project each item to a collection and flatten.
//!
//! The outer cursor only advances once the current inner cursor is exhausted,
//! so empty collections are skipped without yielding anything. Whether a
//! selected collection is pull-capable is checked when it is reached, not
//! when the query is built.

use std::marker::PhantomData;
use std::rc::Rc;

use lazyseq_core::{Cursor, IntoSource, Latch, Result, Source};

pub struct SelectMany<S, F, R> {
    source: S,
    collection: Rc<F>,
    result: Rc<R>,
}

impl<S, F, R> SelectMany<S, F, R> {
    pub(crate) fn new(source: S, collection: F, result: R) -> Self {
        Self {
            source,
            collection: Rc::new(collection),
            result: Rc::new(result),
        }
    }
}

impl<S: Clone, F, R> Clone for SelectMany<S, F, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            collection: Rc::clone(&self.collection),
            result: Rc::clone(&self.result),
        }
    }
}

impl<S, F, R, P, U> Source for SelectMany<S, F, R>
where
    S: Source,
    F: Fn(S::Item) -> P,
    P: IntoSource,
    R: Fn(P::Item) -> U,
{
    type Item = U;
    type Cursor = SelectManyCursor<S::Cursor, F, R, P>;

    fn cursor(&self) -> Self::Cursor {
        SelectManyCursor {
            outer: Latch::new(self.source.cursor()),
            inner: Latch::done(),
            collection: Rc::clone(&self.collection),
            result: Rc::clone(&self.result),
            _collection: PhantomData,
        }
    }
}

pub struct SelectManyCursor<C, F, R, P: IntoSource> {
    outer: Latch<C>,
    inner: Latch<<P::Source as Source>::Cursor>,
    collection: Rc<F>,
    result: Rc<R>,
    _collection: PhantomData<fn() -> P>,
}

impl<C, F, R, P, U> Cursor for SelectManyCursor<C, F, R, P>
where
    C: Cursor,
    F: Fn(C::Item) -> P,
    P: IntoSource,
    R: Fn(P::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Result<Option<U>> {
        loop {
            match self.inner.pull() {
                Ok(Some(item)) => return Ok(Some((self.result)(item))),
                Ok(None) => {}
                Err(e) => {
                    self.outer.release();
                    return Err(e);
                }
            }

            let Some(parent) = self.outer.pull()? else {
                return Ok(None);
            };
            match (self.collection)(parent).into_source() {
                Ok(children) => self.inner = Latch::new(children.cursor()),
                Err(e) => {
                    self.outer.release();
                    return Err(e.within("select_many"));
                }
            }
        }
    }

    fn release(&mut self) {
        self.inner.release();
        self.outer.release();
    }
}
