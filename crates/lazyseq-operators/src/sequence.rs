//! The [`Sequence`] facade: construction and the lazy operator chain.
//!
//! Lazy operators consume `self` and return a new `Sequence` wrapping a
//! producer layered over the old one. Nothing is pulled and no callback runs
//! until a terminal operator (see `terminal`) or an iterator drains a cursor.

use std::hash::Hash;

use lazyseq_core::defaults::{identity, structural_eq};
use lazyseq_core::{Empty, IntoSource, Iter, IterSource, OneShot, QueryConfig, Result, Source};

use crate::concat::Concat;
use crate::distinct::{Distinct, DistinctBy};
use crate::filter::Filter;
use crate::flatten::SelectMany;
use crate::join::{Join, JoinFns};
use crate::map::Select;
use crate::slice::{Skip, SkipWhile, Take, TakeWhile};

/// Lazy, composable query over a producer of cursors.
#[derive(Clone)]
pub struct Sequence<S> {
    pub(crate) source: S,
    pub(crate) config: QueryConfig,
}

impl<T> Sequence<Empty<T>> {
    /// A sequence whose first pull reports done.
    pub fn empty() -> Self {
        Self::from_source(Empty::new())
    }
}

impl<C: IntoIterator + Clone> Sequence<IterSource<C>> {
    /// Wrap any cloneable iterable; every cursor iterates a fresh clone.
    pub fn from_iterable(collection: C) -> Self {
        Self::from_source(IterSource::new(collection))
    }
}

impl<I: Iterator> Sequence<OneShot<I>> {
    /// Wrap a one-shot iterator. All cursors share it, so a second traversal
    /// continues where the first stopped.
    pub fn once(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self::from_source(OneShot::new(iter.into_iter()))
    }
}

impl<S: Source> Sequence<S> {
    /// Wrap a pull-capable value.
    ///
    /// Fails with [`Error::Construction`](lazyseq_core::Error::Construction)
    /// when `source` cannot produce cursors (e.g. a JSON object or number).
    #[allow(clippy::should_implement_trait)]
    pub fn from<P>(source: P) -> Result<Self>
    where
        P: IntoSource<Item = S::Item, Source = S>,
    {
        Ok(Self::from_source(source.into_source()?))
    }

    pub fn from_source(source: S) -> Self {
        Self {
            source,
            config: QueryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mint a fresh cursor. The caller owns it and should `release` it when
    /// abandoning it early.
    pub fn cursor(&self) -> S::Cursor {
        self.source.cursor()
    }

    /// Iterate a fresh cursor; dropping the iterator early releases it.
    pub fn iter(&self) -> Iter<S::Cursor> {
        Iter::new(self.source.cursor())
    }

    /// Layer a new producer over this one, carrying the config along.
    fn wrap<N>(self, layer: impl FnOnce(S) -> N) -> Sequence<N> {
        Sequence {
            source: layer(self.source),
            config: self.config,
        }
    }

    /// Keep items matching `predicate`.
    #[doc(alias = "where")]
    pub fn filter<P>(self, predicate: P) -> Sequence<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        self.wrap(|source| Filter::new(source, predicate))
    }

    /// One-to-one projection.
    pub fn select<F, U>(self, selector: F) -> Sequence<Select<S, F>>
    where
        F: Fn(S::Item) -> U,
    {
        self.wrap(|source| Select::new(source, selector))
    }

    /// Project each item to a collection and flatten the results.
    ///
    /// A selected value that is not pull-capable fails the pull that reaches
    /// it, not this call.
    pub fn select_many<F, P>(
        self,
        collection: F,
    ) -> Sequence<SelectMany<S, F, fn(P::Item) -> P::Item>>
    where
        F: Fn(S::Item) -> P,
        P: IntoSource,
    {
        self.select_many_with(collection, identity as fn(P::Item) -> P::Item)
    }

    /// [`select_many`](Self::select_many) with a projection applied to every
    /// flattened item.
    pub fn select_many_with<F, P, R, U>(
        self,
        collection: F,
        result: R,
    ) -> Sequence<SelectMany<S, F, R>>
    where
        F: Fn(S::Item) -> P,
        P: IntoSource,
        R: Fn(P::Item) -> U,
    {
        self.wrap(|source| SelectMany::new(source, collection, result))
    }

    /// Flatten items that are themselves collections.
    #[allow(clippy::type_complexity)]
    pub fn flatten(
        self,
    ) -> Sequence<
        SelectMany<
            S,
            fn(S::Item) -> S::Item,
            fn(<S::Item as IntoSource>::Item) -> <S::Item as IntoSource>::Item,
        >,
    >
    where
        S::Item: IntoSource,
    {
        self.select_many(identity as fn(S::Item) -> S::Item)
    }

    /// Drain this sequence, then `other`.
    ///
    /// `other` is checked for the pull capability now.
    pub fn concat<P>(self, other: P) -> Result<Sequence<Concat<S, P::Source>>>
    where
        P: IntoSource<Item = S::Item>,
    {
        let other = other.into_source().map_err(|e| e.within("concat"))?;
        Ok(self.wrap(|source| Concat::new(source, other)))
    }

    /// Drop items equal to one already yielded, by `Eq + Hash`.
    pub fn distinct(self) -> Sequence<Distinct<S>>
    where
        S::Item: Eq + Hash + Clone,
    {
        let capacity_hint = self.config.distinct_capacity_hint;
        self.wrap(|source| Distinct::new(source, capacity_hint))
    }

    /// Drop items that `equals` matches against one already yielded.
    pub fn distinct_by<E>(self, equals: E) -> Sequence<DistinctBy<S, E>>
    where
        S::Item: Clone,
        E: Fn(&S::Item, &S::Item) -> bool,
    {
        self.wrap(|source| DistinctBy::new(source, equals))
    }

    /// Pair each item with the first `inner` item whose key is equal.
    ///
    /// Items without a match are dropped. `inner` is checked for the pull
    /// capability now and re-scanned from its start for every outer item.
    #[allow(clippy::type_complexity)]
    pub fn join<P, KO, KI, R, K, U>(
        self,
        inner: P,
        outer_key: KO,
        inner_key: KI,
        result: R,
    ) -> Result<Sequence<Join<S, P::Source, KO, KI, R, fn(&K, &K) -> bool>>>
    where
        P: IntoSource,
        KO: Fn(&S::Item) -> K,
        KI: Fn(&P::Item) -> K,
        R: Fn(S::Item, P::Item) -> U,
        K: PartialEq,
    {
        self.join_by(
            inner,
            outer_key,
            inner_key,
            result,
            structural_eq::<K, K> as fn(&K, &K) -> bool,
        )
    }

    /// [`join`](Self::join) with a custom key comparer.
    pub fn join_by<P, KO, KI, R, E, K1, K2, U>(
        self,
        inner: P,
        outer_key: KO,
        inner_key: KI,
        result: R,
        equals: E,
    ) -> Result<Sequence<Join<S, P::Source, KO, KI, R, E>>>
    where
        P: IntoSource,
        KO: Fn(&S::Item) -> K1,
        KI: Fn(&P::Item) -> K2,
        R: Fn(S::Item, P::Item) -> U,
        E: Fn(&K1, &K2) -> bool,
    {
        let inner = inner.into_source().map_err(|e| e.within("join"))?;
        let fns = JoinFns {
            outer_key,
            inner_key,
            result,
            equals,
        };
        Ok(self.wrap(|source| Join::new(source, inner, fns)))
    }

    pub fn skip(self, count: usize) -> Sequence<Skip<S>> {
        self.wrap(|source| Skip::new(source, count))
    }

    /// Skip leading items while `predicate` holds; everything after the first
    /// failure passes through.
    pub fn skip_while<P>(self, predicate: P) -> Sequence<SkipWhile<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        self.wrap(|source| SkipWhile::new(source, predicate))
    }

    pub fn take(self, count: usize) -> Sequence<Take<S>> {
        self.wrap(|source| Take::new(source, count))
    }

    /// Yield leading items while `predicate` holds, then report done for good.
    pub fn take_while<P>(self, predicate: P) -> Sequence<TakeWhile<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        self.wrap(|source| TakeWhile::new(source, predicate))
    }
}

impl<'a, S: Source> IntoIterator for &'a Sequence<S> {
    type Item = Result<S::Item>;
    type IntoIter = Iter<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Source> IntoIterator for Sequence<S> {
    type Item = Result<S::Item>;
    type IntoIter = Iter<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequences are pull-capable, so they can feed `from`, `concat`, `join`, and
/// `select_many`.
impl<S: Source> IntoSource for Sequence<S> {
    type Item = S::Item;
    type Source = S;

    fn into_source(self) -> Result<S> {
        Ok(self.source)
    }
}
