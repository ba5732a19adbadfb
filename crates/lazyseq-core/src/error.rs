use thiserror::Error;

/// Canonical result for every lazyseq crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value handed to `from`/`concat`/`join`, or a collection discovered by
    /// `select_many`, cannot produce cursors.
    #[error("{context}: {found} is not iterable")]
    Construction {
        found: &'static str,
        context: &'static str,
    },

    #[error("sequence contains no matching element")]
    NotFound,

    #[error("sequence contains more than one matching element")]
    AmbiguousMatch,
}

/// Coarse classification of [`Error`], for callers that branch on the failure
/// class rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Construction,
    NotFound,
    AmbiguousMatch,
}

impl Error {
    pub fn not_iterable(found: &'static str) -> Self {
        Error::Construction {
            found,
            context: "from",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Construction { .. } => ErrorKind::Construction,
            Error::NotFound => ErrorKind::NotFound,
            Error::AmbiguousMatch => ErrorKind::AmbiguousMatch,
        }
    }

    /// Re-label a construction error with the operator that rejected the value.
    /// Other kinds pass through untouched.
    pub fn within(self, op: &'static str) -> Self {
        match self {
            Error::Construction { found, .. } => Error::Construction { found, context: op },
            other => other,
        }
    }
}
