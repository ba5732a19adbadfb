#![forbid(unsafe_code)]
//! lazyseq-core: the pull protocol shared by every lazyseq crate.
//!
//! - [`Cursor`]: a single-use handle that yields one value per pull.
//! - [`Source`]: a producer that mints fresh cursors on demand.
//! - [`IntoSource`]: the fallible "is this pull-capable?" check used by
//!   `from`, `concat`, `join`, and `select_many`.
//!
//! Operators live in `lazyseq-operators`; nothing here evaluates a query.

pub mod config;
pub mod cursor;
pub mod defaults;
pub mod error;
pub mod prelude;
pub mod source;
pub mod trace;
pub mod value;

pub use config::QueryConfig;
pub use cursor::{Cursor, Iter, Latch};
pub use error::{Error, ErrorKind, Result};
pub use source::{Empty, IntoSource, IterSource, Iterable, OneShot, SliceSource, Source, StrSource};
pub use value::ValueSource;
