//! Table plugin
//!
//! Registry of the catalog tables and the entry point a query host calls.
//!
//! # Overview
//!
//! - `list` scans a table: the lister streams summary records and, only when
//!   a requested column needs it, each row is hydrated with its detail record.
//! - `get` answers an equality lookup on the key column with a single detail
//!   fetch and no listing.
//! - `query` picks between the two depending on whether a key is given.

mod types;

pub use types::{QueryContext, QueryStats};

use crate::api::{CatalogApi, PokeApiClient};
use crate::config::ConnectorConfig;
use crate::engine::{Hydrator, Lister, Sink};
use crate::error::{Error, Result};
use crate::not_found::NotFoundClassifier;
use crate::tables::{all_tables, TableDefinition};
use crate::types::Row;
use futures::TryStreamExt;
use tracing::debug;

/// Plugin name
pub const PLUGIN_NAME: &str = "pokeapi-tables";

/// Catalog tables over one API client
pub struct Plugin<A> {
    api: A,
    classifier: NotFoundClassifier,
    tables: Vec<TableDefinition>,
}

impl Plugin<PokeApiClient> {
    /// Build the plugin against the HTTP API described by `config`
    pub fn from_config(config: &ConnectorConfig) -> Result<Self> {
        let api = PokeApiClient::new(config)?;
        let classifier = NotFoundClassifier::new(config.not_found_patterns.iter().cloned());
        Ok(Self::new(api, classifier))
    }
}

impl<A: CatalogApi> Plugin<A> {
    /// Create a plugin over any catalog API
    pub fn new(api: A, classifier: NotFoundClassifier) -> Self {
        Self {
            api,
            classifier,
            tables: all_tables(),
        }
    }

    /// The API client
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Registered tables
    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Result<&TableDefinition> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::TableNotFound {
                table: name.to_string(),
            })
    }

    /// Answer a query, as a lookup when a key is given and a scan otherwise
    pub async fn query<S>(
        &self,
        table: &str,
        ctx: &QueryContext,
        sink: &mut S,
    ) -> Result<QueryStats>
    where
        S: Sink<Row> + ?Sized,
    {
        if ctx.key.is_none() {
            return self.list(table, ctx, sink).await;
        }

        let mut stats = QueryStats::default();
        if ctx.limit_reached(0) {
            return Ok(stats);
        }
        stats.detail_fetches += 1;
        if let Some(row) = self.get(table, ctx).await? {
            stats.rows_emitted += 1;
            sink.push(row);
        }
        Ok(stats)
    }

    /// Scan every row of a table into `sink`
    ///
    /// Detail records are fetched per row only when a requested column is
    /// detail-sourced. Rows whose detail record turns out not to exist are
    /// left out. Stops fetching when the limit is reached or the sink asks.
    pub async fn list<S>(
        &self,
        table: &str,
        ctx: &QueryContext,
        sink: &mut S,
    ) -> Result<QueryStats>
    where
        S: Sink<Row> + ?Sized,
    {
        let table = self.table(table)?;
        let columns = table.resolve_columns(ctx.columns.as_slice())?;
        let needs_detail = TableDefinition::needs_detail(&columns);
        debug!(table = table.name, needs_detail, "list");

        let mut stats = QueryStats::default();
        if ctx.limit_reached(0) {
            return Ok(stats);
        }

        let hydrator = Hydrator::new(&self.api, &self.classifier);
        let mut summaries = Lister::new(&self.api).stream(table.kind);

        while let Some(summary) = summaries.try_next().await? {
            let detail = if needs_detail {
                stats.detail_fetches += 1;
                match hydrator.hydrate(table.kind, &summary).await? {
                    Some(record) => Some(record.to_object()?),
                    None => {
                        stats.rows_skipped += 1;
                        continue;
                    }
                }
            } else {
                None
            };

            let row = TableDefinition::build_row(&columns, Some(&summary), detail.as_ref());
            stats.rows_emitted += 1;
            if sink.push(row).is_stop() || ctx.limit_reached(stats.rows_emitted) {
                break;
            }
        }

        Ok(stats)
    }

    /// Fetch the single row matching the key qualifier of `ctx`
    ///
    /// Returns `None` when the resource does not exist.
    pub async fn get(&self, table: &str, ctx: &QueryContext) -> Result<Option<Row>> {
        let table = self.table(table)?;
        let key = ctx.key.as_ref().ok_or_else(|| {
            Error::config(format!("{}: get requires a key qualifier", table.name))
        })?;
        let columns = table.resolve_columns(ctx.columns.as_slice())?;

        let hydrator = Hydrator::new(&self.api, &self.classifier);
        let Some(record) = hydrator.get(table.kind, key).await? else {
            return Ok(None);
        };

        let fields = record.to_object()?;
        Ok(Some(TableDefinition::build_row(&columns, None, Some(&fields))))
    }
}
