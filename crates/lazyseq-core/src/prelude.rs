//! Convenient re-exports for downstream crates.

pub use crate::config::QueryConfig;
pub use crate::cursor::{Cursor, Iter, Latch};
pub use crate::defaults::{always_false, always_true, identity, structural_eq};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::source::{IntoSource, Iterable, Source};
