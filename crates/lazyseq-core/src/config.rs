//! Query configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Name attached to trace events emitted by this query.
    pub label: Option<String>,

    /// Emit one trace event per terminal operator (requires the `tracing` feature).
    pub trace_terminals: bool,

    /// Initial capacity of the seen-set kept by `distinct()` per cursor.
    pub distinct_capacity_hint: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            label: None,
            trace_terminals: false,
            distinct_capacity_hint: 16,
        }
    }
}

impl QueryConfig {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYSEQ_LABEL`: trace label
    /// - `LAZYSEQ_TRACE_TERMINALS`: `1`/`true` to trace terminal operators
    /// - `LAZYSEQ_DISTINCT_CAPACITY`: seen-set capacity hint for `distinct()`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("LAZYSEQ_LABEL") {
            if !s.trim().is_empty() {
                cfg.label = Some(s);
            }
        }

        if let Some(s) = lookup("LAZYSEQ_TRACE_TERMINALS") {
            cfg.trace_terminals = matches!(s.trim(), "1" | "true" | "TRUE" | "yes");
        }

        if let Some(s) = lookup("LAZYSEQ_DISTINCT_CAPACITY") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.distinct_capacity_hint = v;
            }
        }

        cfg
    }
}
