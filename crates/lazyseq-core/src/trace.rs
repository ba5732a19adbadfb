//! Trace hooks (feature: `tracing`).
//!
//! Compiles to nothing unless the feature is enabled, and stays quiet unless
//! the query's config asks for it.

use crate::config::QueryConfig;
use crate::error::Result;

#[cfg(feature = "tracing")]
pub fn terminal<R>(config: &QueryConfig, op: &'static str, pulled: usize, result: &Result<R>) {
    if !config.trace_terminals {
        return;
    }
    let label = config.label.as_deref().unwrap_or("-");
    match result {
        Ok(_) => tracing::trace!(op, label, pulled, "terminal operator finished"),
        Err(e) => tracing::trace!(op, label, pulled, error = %e, "terminal operator failed"),
    }
}

#[cfg(not(feature = "tracing"))]
pub fn terminal<R>(_config: &QueryConfig, _op: &'static str, _pulled: usize, _result: &Result<R>) {
    /* no-op */
}
