#![forbid(unsafe_code)]
//! lazyseq: lazy, pull-based sequence queries.
//!
//! ```
//! use lazyseq::Sequence;
//!
//! let doubled = Sequence::from(vec![1, 3, 5, 6, 10, 35, 9, 8])?
//!     .filter(|n| *n >= 6)
//!     .select(|n| n * 2)
//!     .to_vec()?;
//! assert_eq!(doubled, vec![12, 20, 70, 18, 16]);
//! # Ok::<(), lazyseq::Error>(())
//! ```
//!
//! Building a query never pulls from the source or calls a callback; terminal
//! operators (`to_vec`, `count`, `first`, ...) and iteration do.

pub use lazyseq_core::{
    config, cursor, defaults, error, source, value, Cursor, Empty, Error, ErrorKind, IntoSource,
    Iter, IterSource, Iterable, Latch, OneShot, QueryConfig, Result, SliceSource, Source,
    StrSource, ValueSource,
};
pub use lazyseq_operators::{concat, distinct, filter, flatten, join, map, slice, Sequence};

pub mod prelude {
    pub use lazyseq_core::prelude::*;
    pub use lazyseq_operators::Sequence;
}
