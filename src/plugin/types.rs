//! Query types
//!
//! What a caller asks of a table, and what answering it cost.

use crate::types::LookupKey;

/// Parameters of one table query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    /// Requested columns (empty = all columns)
    pub columns: Vec<String>,
    /// Maximum number of rows to produce
    pub limit: Option<usize>,
    /// Equality qualifier on the key column
    pub key: Option<LookupKey>,
}

impl QueryContext {
    /// Create an empty query context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set requested columns
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set a row limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set a key qualifier
    #[must_use]
    pub fn with_key(mut self, key: LookupKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Whether the limit has been reached after `rows` rows
    pub fn limit_reached(&self, rows: u64) -> bool {
        self.limit.is_some_and(|limit| rows >= limit as u64)
    }
}

/// Statistics of one query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Rows delivered to the sink
    pub rows_emitted: u64,
    /// Detail fetches issued
    pub detail_fetches: u64,
    /// Listed resources dropped because their detail record was not found
    pub rows_skipped: u64,
}
