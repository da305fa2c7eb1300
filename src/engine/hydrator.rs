//! Detail hydration
//!
//! Fetches the full record of one resource on demand. Nothing is cached:
//! every call is one remote fetch.

use crate::api::{CatalogApi, DetailRecord, NamedResource};
use crate::error::{Error, Operation, Result, ResultExt};
use crate::not_found::NotFoundClassifier;
use crate::types::{LookupKey, ResourceKind};
use tracing::{debug, error, trace};

/// Fetches detail records, suppressing not-found failures where asked
pub struct Hydrator<'a, A: ?Sized> {
    api: &'a A,
    classifier: &'a NotFoundClassifier,
}

impl<'a, A: CatalogApi + ?Sized> Hydrator<'a, A> {
    /// Create a hydrator over an API client
    pub fn new(api: &'a A, classifier: &'a NotFoundClassifier) -> Self {
        Self { api, classifier }
    }

    /// Fetch one detail record; every failure is an error
    pub async fn fetch(&self, kind: ResourceKind, key: &LookupKey) -> Result<DetailRecord> {
        let table = kind.table_name();
        trace!(table, key = %key, "fetch");

        self.api
            .get_detail(kind, key)
            .await
            .inspect_err(|e| error!(table, key = %key, error = %e, "query_error"))
            .in_operation(table, Operation::Get)
    }

    /// Fetch one detail record, returning `None` when it does not exist
    ///
    /// A key that cannot address a record yields `None` without a fetch.
    pub async fn get(&self, kind: ResourceKind, key: &LookupKey) -> Result<Option<DetailRecord>> {
        let table = kind.table_name();
        trace!(table, key = %key, "get");

        if !key.is_addressable() {
            debug!(table, key = %key, "unaddressable key, no record");
            return Ok(None);
        }

        match self.api.get_detail(kind, key).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if self.classifier.is_not_found(&e) => {
                debug!(table, key = %key, error = %e, "not found, ignoring");
                Ok(None)
            }
            Err(e) => {
                error!(table, key = %key, error = %e, "query_error");
                Err(Error::operation(table, Operation::Get, e))
            }
        }
    }

    /// Fetch the detail record behind a listed summary
    pub async fn hydrate(
        &self,
        kind: ResourceKind,
        summary: &NamedResource,
    ) -> Result<Option<DetailRecord>> {
        self.get(kind, &LookupKey::name(summary.name.as_str())).await
    }
}
