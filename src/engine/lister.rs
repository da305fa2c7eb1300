//! Offset-paginated listing
//!
//! Walks a list endpoint from offset 0 until a page arrives without a next
//! cursor. Pages are fetched one at a time, only when the consumer asks for
//! more, and their records are handed on immediately.

use super::types::{ListStats, Sink};
use crate::api::{CatalogApi, NamedResource};
use crate::error::{Error, Operation, Result};
use crate::pagination::{next_page, PaginationState};
use crate::types::ResourceKind;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::{debug, error, trace};

/// Position of a listing between page fetches
enum Cursor {
    At(PaginationState),
    /// Cursor decoding failed after the last page was delivered
    Failed(Error),
    Finished,
}

/// Lists every resource of a kind
pub struct Lister<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: CatalogApi + ?Sized> Lister<'a, A> {
    /// Create a lister over an API client
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Lazy stream of pages, each the records of one list call
    ///
    /// Every call starts again at offset 0. A failed page fetch ends the
    /// stream with an error tagged `list`; a malformed next cursor ends it
    /// with an error tagged `extract_url_offset` after that page's records.
    pub fn pages(&self, kind: ResourceKind) -> BoxStream<'a, Result<Vec<NamedResource>>> {
        let api = self.api;
        let table = kind.table_name();
        trace!(table, "list");

        stream::try_unfold(
            Cursor::At(PaginationState::new()),
            move |cursor| async move {
                let mut state = match cursor {
                    Cursor::Finished => return Ok(None),
                    Cursor::Failed(err) => return Err(err),
                    Cursor::At(state) => state,
                };

                let page = api.list_page(kind, state.offset).await.map_err(|e| {
                    error!(table, offset = state.offset, error = %e, "query_error");
                    Error::operation(table, Operation::List, e)
                })?;
                state.record_page(page.results.len());
                debug!(
                    table,
                    offset = state.offset,
                    records = page.results.len(),
                    page = state.pages_fetched,
                    total = state.total_fetched,
                    "fetched page"
                );

                let advanced = next_page(page.next.as_deref()).and_then(|next| state.advance(next));
                let cursor = match advanced {
                    Ok(()) if state.done => Cursor::Finished,
                    Ok(()) => Cursor::At(state),
                    Err(e) => {
                        error!(table, error = %e, "extract_url_offset_error");
                        Cursor::Failed(Error::operation(table, Operation::ExtractOffset, e))
                    }
                };

                Ok(Some((page.results, cursor)))
            },
        )
        .boxed()
    }

    /// Lazy stream of summary records
    pub fn stream(&self, kind: ResourceKind) -> BoxStream<'a, Result<NamedResource>> {
        self.pages(kind)
            .map_ok(|records| stream::iter(records.into_iter().map(Ok)))
            .try_flatten()
            .boxed()
    }

    /// Push every summary record of `kind` into `sink`
    ///
    /// Stops without fetching further pages once the sink asks to.
    pub async fn list_into<S>(&self, kind: ResourceKind, sink: &mut S) -> Result<ListStats>
    where
        S: Sink<NamedResource> + ?Sized,
    {
        let mut stats = ListStats::default();
        let mut pages = self.pages(kind);

        while let Some(records) = pages.try_next().await? {
            stats.pages_fetched += 1;
            for record in records {
                stats.records_emitted += 1;
                if sink.push(record).is_stop() {
                    stats.stopped_early = true;
                    return Ok(stats);
                }
            }
        }

        Ok(stats)
    }
}
