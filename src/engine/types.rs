//! Engine types
//!
//! Sink interface and statistics for listings.

/// Whether a sink wants more items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkControl {
    /// Keep producing
    Continue,
    /// Stop producing; no further pages are fetched
    Stop,
}

impl SinkControl {
    /// Check if the producer should stop
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Consumer of streamed items
///
/// Items are pushed as soon as they are produced. Returning
/// [`SinkControl::Stop`] ends the producer early, e.g. on a row limit.
pub trait Sink<T>: Send {
    /// Accept one item
    fn push(&mut self, item: T) -> SinkControl;
}

impl<T: Send> Sink<T> for Vec<T> {
    fn push(&mut self, item: T) -> SinkControl {
        Vec::push(self, item);
        SinkControl::Continue
    }
}

/// Statistics of one listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStats {
    /// Pages fetched
    pub pages_fetched: u32,
    /// Records delivered to the sink
    pub records_emitted: u64,
    /// Whether the sink ended the listing before the final page
    pub stopped_early: bool,
}
