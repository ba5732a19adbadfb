//! `concat`: drain the current sequence, then the other one.

use lazyseq_core::{Cursor, Latch, Result, Source};

#[derive(Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Source for Concat<A, B>
where
    A: Source,
    B: Source<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ConcatCursor {
            first: Latch::new(self.first.cursor()),
            second: Latch::new(self.second.cursor()),
            on_second: false,
        }
    }
}

pub struct ConcatCursor<A, B> {
    first: Latch<A>,
    second: Latch<B>,
    /// Flips exactly once, when `first` reports done.
    on_second: bool,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Result<Option<A::Item>> {
        if !self.on_second {
            match self.first.pull() {
                Ok(Some(item)) => return Ok(Some(item)),
                Ok(None) => self.on_second = true,
                Err(e) => {
                    // A failed first half must not fall through to the second.
                    self.second.release();
                    return Err(e);
                }
            }
        }
        self.second.pull()
    }

    fn release(&mut self) {
        self.first.release();
        self.second.release();
    }
}
