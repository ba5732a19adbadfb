//! Terminal operators: force evaluation and return plain values.
//!
//! Every terminal drains one fresh cursor through [`Drain`]. A terminal that
//! stops before the cursor reports done releases it on the way out; a cursor
//! drained to the end has already dropped its upstream and is left alone.

use lazyseq_core::defaults::always_true;
use lazyseq_core::{trace, Cursor, Error, Latch, Result, Source};

use crate::sequence::Sequence;

/// One terminal's cursor plus the number of items it pulled.
struct Drain<C> {
    cursor: Latch<C>,
    pulled: usize,
}

impl<C: Cursor> Drain<C> {
    fn pull(&mut self) -> Result<Option<C::Item>> {
        let item = self.cursor.pull()?;
        if item.is_some() {
            self.pulled += 1;
        }
        Ok(item)
    }
}

impl<S: Source> Sequence<S> {
    fn run<R>(
        &self,
        op: &'static str,
        body: impl FnOnce(&mut Drain<S::Cursor>) -> Result<R>,
    ) -> Result<R> {
        let mut drain = Drain {
            cursor: Latch::new(self.source.cursor()),
            pulled: 0,
        };
        let result = body(&mut drain);
        drain.cursor.release();
        trace::terminal(&self.config, op, drain.pulled, &result);
        result
    }

    /// Materialize every item, in order.
    #[doc(alias = "to_array")]
    pub fn to_vec(&self) -> Result<Vec<S::Item>> {
        self.run("to_vec", |drain| {
            let mut items = Vec::new();
            while let Some(item) = drain.pull()? {
                items.push(item);
            }
            Ok(items)
        })
    }

    /// Fold without a seed: the first item seeds the accumulator.
    ///
    /// Returns `None` for an empty sequence.
    pub fn aggregate<F>(&self, step: F) -> Result<Option<S::Item>>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        self.aggregate_with(None, step, |acc| acc)
    }

    /// Fold with an optional seed and a projection of the final accumulator.
    ///
    /// With `seed == None` the first item seeds the accumulator. If there is
    /// no seed and no item, `project` receives `None`.
    pub fn aggregate_with<F, P, R>(&self, seed: Option<S::Item>, mut step: F, project: P) -> Result<R>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
        P: FnOnce(Option<S::Item>) -> R,
    {
        let acc = self.run("aggregate", |drain| {
            let mut acc = match seed {
                Some(seed) => seed,
                None => match drain.pull()? {
                    Some(first) => first,
                    None => return Ok(None),
                },
            };
            while let Some(item) = drain.pull()? {
                acc = step(acc, item);
            }
            Ok(Some(acc))
        })?;
        Ok(project(acc))
    }

    /// Fold into an accumulator of a different type.
    pub fn aggregate_seeded<A, F>(&self, seed: A, step: F) -> Result<A>
    where
        F: FnMut(A, S::Item) -> A,
    {
        self.aggregate_seeded_with(seed, step, |acc| acc)
    }

    /// [`aggregate_seeded`](Self::aggregate_seeded), then `project` the final
    /// accumulator.
    pub fn aggregate_seeded_with<A, F, P, R>(&self, seed: A, mut step: F, project: P) -> Result<R>
    where
        F: FnMut(A, S::Item) -> A,
        P: FnOnce(A) -> R,
    {
        let acc = self.run("aggregate", |drain| {
            let mut acc = seed;
            while let Some(item) = drain.pull()? {
                acc = step(acc, item);
            }
            Ok(acc)
        })?;
        Ok(project(acc))
    }

    /// `true` unless some item fails `predicate`. Stops at the first failure.
    pub fn all<P>(&self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.run("all", |drain| {
            while let Some(item) = drain.pull()? {
                if !predicate(&item) {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// `true` if the sequence has at least one item.
    pub fn any(&self) -> Result<bool> {
        self.any_by(always_true)
    }

    /// `true` if some item matches `predicate`. Stops at the first match.
    pub fn any_by<P>(&self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.run("any", |drain| {
            while let Some(item) = drain.pull()? {
                if predicate(&item) {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    pub fn contains(&self, element: &S::Item) -> Result<bool>
    where
        S::Item: PartialEq,
    {
        self.contains_by(element, |item, element| item == element)
    }

    /// `equals` receives the candidate item first, then `element`.
    pub fn contains_by<Q, E>(&self, element: &Q, mut equals: E) -> Result<bool>
    where
        Q: ?Sized,
        E: FnMut(&S::Item, &Q) -> bool,
    {
        self.run("contains", |drain| {
            while let Some(item) = drain.pull()? {
                if equals(&item, element) {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    /// Number of items. Always a full traversal.
    pub fn count(&self) -> Result<usize> {
        self.count_by(always_true)
    }

    pub fn count_by<P>(&self, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.run("count", |drain| {
            let mut n = 0;
            while let Some(item) = drain.pull()? {
                if predicate(&item) {
                    n += 1;
                }
            }
            Ok(n)
        })
    }

    /// The first item, or [`Error::NotFound`] when the sequence is empty.
    pub fn first(&self) -> Result<S::Item> {
        self.first_by(always_true)
    }

    pub fn first_by<P>(&self, predicate: P) -> Result<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.first_or_default_by(predicate)?.ok_or(Error::NotFound)
    }

    pub fn first_or_default(&self) -> Result<Option<S::Item>> {
        self.first_or_default_by(always_true)
    }

    pub fn first_or_default_by<P>(&self, mut predicate: P) -> Result<Option<S::Item>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.run("first", |drain| {
            while let Some(item) = drain.pull()? {
                if predicate(&item) {
                    return Ok(Some(item));
                }
            }
            Ok(None)
        })
    }

    /// The only item. [`Error::NotFound`] if empty, [`Error::AmbiguousMatch`]
    /// as soon as a second item is pulled.
    pub fn single(&self) -> Result<S::Item> {
        self.single_by(always_true)
    }

    pub fn single_by<P>(&self, predicate: P) -> Result<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.single_or_default_by(predicate)?.ok_or(Error::NotFound)
    }

    pub fn single_or_default(&self) -> Result<Option<S::Item>> {
        self.single_or_default_by(always_true)
    }

    /// The only matching item, or `None` if nothing matches.
    ///
    /// Fails with [`Error::AmbiguousMatch`] the moment a second match is
    /// pulled; the rest of the sequence is not traversed.
    pub fn single_or_default_by<P>(&self, mut predicate: P) -> Result<Option<S::Item>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.run("single", |drain| {
            let mut matched = None;
            while let Some(item) = drain.pull()? {
                if predicate(&item) {
                    if matched.is_some() {
                        return Err(Error::AmbiguousMatch);
                    }
                    matched = Some(item);
                }
            }
            Ok(matched)
        })
    }
}
