//! Producers and the pull-capability check.
//!
//! A [`Source`] mints independent cursors; every call to `cursor()` starts a
//! fresh traversal (except [`OneShot`], whose cursors share one iterator).
//! [`IntoSource`] is how arguments are checked for the pull capability: typed
//! collections always pass, dynamic values (see `value`) may not.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::ops::{Range, RangeInclusive};
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::error::Result;

/// A producer of cursors.
pub trait Source {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;
}

/// Values that can be turned into a [`Source`].
///
/// Fails with `Error::Construction` when the value has no pull capability.
pub trait IntoSource {
    type Item;
    type Source: Source<Item = Self::Item>;

    fn into_source(self) -> Result<Self::Source>;
}

// ----- empty -----

/// Source whose cursors are done on the first pull.
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Source for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        EmptyCursor { _item: PhantomData }
    }
}

pub struct EmptyCursor<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        Ok(None)
    }

    fn release(&mut self) {}
}

// ----- any re-iterable collection -----

/// Source over any `IntoIterator + Clone` value; each cursor iterates a clone.
#[derive(Debug, Clone)]
pub struct IterSource<C> {
    collection: C,
}

impl<C> IterSource<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }
}

impl<C: IntoIterator + Clone> Source for IterSource<C> {
    type Item = C::Item;
    type Cursor = IterCursor<C::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor {
            iter: Some(self.collection.clone().into_iter()),
        }
    }
}

pub struct IterCursor<I> {
    iter: Option<I>,
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Result<Option<I::Item>> {
        let Some(iter) = self.iter.as_mut() else {
            return Ok(None);
        };
        let item = iter.next();
        if item.is_none() {
            // Not every iterator is fused; never ask it again.
            self.iter = None;
        }
        Ok(item)
    }

    fn release(&mut self) {
        self.iter = None;
    }
}

/// Wrapper that makes any `IntoIterator + Clone` value pull-capable.
#[derive(Debug, Clone)]
pub struct Iterable<C>(pub C);

impl<C: IntoIterator + Clone> IntoSource for Iterable<C> {
    type Item = C::Item;
    type Source = IterSource<C>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(IterSource::new(self.0))
    }
}

// ----- owned, resident values -----

/// Source over a shared, immutable slice. Cursors clone items out.
pub struct SliceSource<T> {
    items: Rc<[T]>,
}

impl<T> SliceSource<T> {
    pub fn new(items: impl Into<Rc<[T]>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Clone for SliceSource<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: Clone> Source for SliceSource<T> {
    type Item = T;
    type Cursor = SliceCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        SliceCursor {
            items: Rc::clone(&self.items),
            pos: 0,
            done: false,
        }
    }
}

pub struct SliceCursor<T> {
    items: Rc<[T]>,
    pos: usize,
    done: bool,
}

impl<T: Clone> Cursor for SliceCursor<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        if self.done {
            return Ok(None);
        }
        match self.items.get(self.pos) {
            Some(item) => {
                self.pos += 1;
                Ok(Some(item.clone()))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }

    fn release(&mut self) {
        self.done = true;
    }
}

/// Source over the characters of a string.
#[derive(Debug, Clone)]
pub struct StrSource {
    text: Rc<str>,
}

impl StrSource {
    pub fn new(text: impl Into<Rc<str>>) -> Self {
        Self { text: text.into() }
    }
}

impl Source for StrSource {
    type Item = char;
    type Cursor = StrCursor;

    fn cursor(&self) -> Self::Cursor {
        StrCursor {
            text: Rc::clone(&self.text),
            offset: 0,
        }
    }
}

pub struct StrCursor {
    text: Rc<str>,
    /// Byte offset of the next char; `len()` once done.
    offset: usize,
}

impl Cursor for StrCursor {
    type Item = char;

    fn pull(&mut self) -> Result<Option<char>> {
        let next = self.text[self.offset..].chars().next();
        if let Some(ch) = next {
            self.offset += ch.len_utf8();
        }
        Ok(next)
    }

    fn release(&mut self) {
        self.offset = self.text.len();
    }
}

// ----- one-shot iterators -----

/// Source whose cursors all drain the same iterator.
///
/// A second cursor resumes wherever the first one stopped; nothing rewinds.
pub struct OneShot<I> {
    shared: Rc<RefCell<Option<I>>>,
}

impl<I> OneShot<I> {
    pub fn new(iter: I) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Some(iter))),
        }
    }
}

impl<I> Clone for OneShot<I> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<I: Iterator> Source for OneShot<I> {
    type Item = I::Item;
    type Cursor = OneShotCursor<I>;

    fn cursor(&self) -> Self::Cursor {
        OneShotCursor {
            shared: Some(Rc::clone(&self.shared)),
        }
    }
}

pub struct OneShotCursor<I> {
    shared: Option<Rc<RefCell<Option<I>>>>,
}

impl<I: Iterator> Cursor for OneShotCursor<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Result<Option<I::Item>> {
        let Some(shared) = self.shared.as_ref() else {
            return Ok(None);
        };
        let mut slot = shared.borrow_mut();
        let item = slot.as_mut().and_then(Iterator::next);
        if item.is_none() {
            *slot = None;
            drop(slot);
            self.shared = None;
        }
        Ok(item)
    }

    fn release(&mut self) {
        // Other cursors may still want the remainder.
        self.shared = None;
    }
}

// ----- pull capability for std collections -----

impl<T: Clone> IntoSource for Vec<T> {
    type Item = T;
    type Source = SliceSource<T>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(SliceSource::new(self))
    }
}

impl<T: Clone, const N: usize> IntoSource for [T; N] {
    type Item = T;
    type Source = SliceSource<T>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(SliceSource::new(Vec::from(self)))
    }
}

impl<'a, T> IntoSource for &'a [T] {
    type Item = &'a T;
    type Source = IterSource<&'a [T]>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(IterSource::new(self))
    }
}

impl<'a, T> IntoSource for &'a Vec<T> {
    type Item = &'a T;
    type Source = IterSource<&'a [T]>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(IterSource::new(self.as_slice()))
    }
}

impl<T: Clone> IntoSource for VecDeque<T> {
    type Item = T;
    type Source = SliceSource<T>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(SliceSource::new(Vec::from(self)))
    }
}

/// Maps iterate their `(key, value)` entries in the map's own order.
impl<K: Clone, V: Clone> IntoSource for BTreeMap<K, V> {
    type Item = (K, V);
    type Source = SliceSource<(K, V)>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(SliceSource::new(self.into_iter().collect::<Vec<_>>()))
    }
}

impl<K: Clone, V: Clone, H: BuildHasher> IntoSource for HashMap<K, V, H> {
    type Item = (K, V);
    type Source = SliceSource<(K, V)>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(SliceSource::new(self.into_iter().collect::<Vec<_>>()))
    }
}

impl IntoSource for String {
    type Item = char;
    type Source = StrSource;

    fn into_source(self) -> Result<Self::Source> {
        Ok(StrSource::new(self))
    }
}

impl IntoSource for &str {
    type Item = char;
    type Source = StrSource;

    fn into_source(self) -> Result<Self::Source> {
        Ok(StrSource::new(self))
    }
}

impl<A> IntoSource for Range<A>
where
    Range<A>: Iterator<Item = A> + Clone,
{
    type Item = A;
    type Source = IterSource<Range<A>>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(IterSource::new(self))
    }
}

impl<A> IntoSource for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator<Item = A> + Clone,
{
    type Item = A;
    type Source = IterSource<RangeInclusive<A>>;

    fn into_source(self) -> Result<Self::Source> {
        Ok(IterSource::new(self))
    }
}
