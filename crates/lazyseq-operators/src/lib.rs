#![forbid(unsafe_code)]
//! lazyseq-operators: lazy operators (filter/select/flatten/concat/distinct/
//! join/slice) plus the [`Sequence`] facade and its terminal operators.
//!
//! Design intent:
//! - Every lazy operator is a producer struct (owning its upstream producer and
//!   `Rc`-shared callbacks) and a cursor struct holding per-cursor state.
//! - Building a query never calls a user callback; only pulling does.
//! - Each cursor keeps its upstream in a `Latch`, so DONE stays DONE and
//!   `release` reaches every layer.

pub mod concat;
pub mod distinct;
pub mod filter;
pub mod flatten;
pub mod join;
pub mod map;
pub mod sequence;
pub mod slice;
mod terminal;

pub use sequence::Sequence;
