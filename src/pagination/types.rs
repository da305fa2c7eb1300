//! Pagination state
//!
//! Tracks the position of a single listing. Each listing owns its own state.

use crate::error::{Error, Result};

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this offset
    Continue {
        /// Offset of the next page
        offset: u32,
    },
    /// No more pages
    Done,
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Offset of the page to fetch next
    pub offset: u32,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Total records received so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state starting at offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully fetched page
    pub fn record_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.total_fetched += records as u64;
    }

    /// Move to the next page
    ///
    /// The offset must strictly increase; anything else would refetch pages
    /// forever, so it is rejected as a bad cursor.
    pub fn advance(&mut self, next: NextPage) -> Result<()> {
        match next {
            NextPage::Done => {
                self.done = true;
                Ok(())
            }
            NextPage::Continue { offset } if offset > self.offset => {
                self.offset = offset;
                Ok(())
            }
            NextPage::Continue { offset } => Err(Error::cursor_parse(
                offset.to_string(),
                format!("offset did not advance past {}", self.offset),
            )),
        }
    }
}
