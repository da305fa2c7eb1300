//! Catalog API client
//!
//! [`CatalogApi`] is the outbound seam of the engine: one call per list page
//! and one call per detail record. [`PokeApiClient`] implements it over HTTP.

use super::types::{DetailRecord, ResourceList};
use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{LookupKey, ResourceKind};
use async_trait::async_trait;
use tracing::trace;

/// Remote catalog operations used by the lister and hydrator
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of the list endpoint of `kind`, starting at `offset`
    async fn list_page(&self, kind: ResourceKind, offset: u32) -> Result<ResourceList>;

    /// Fetch the detail record of one resource
    ///
    /// The key is sent as a single path segment; keys that cannot address a
    /// record (see [`LookupKey::is_addressable`]) are rejected unsent.
    async fn get_detail(&self, kind: ResourceKind, key: &LookupKey) -> Result<DetailRecord>;
}

/// HTTP implementation of [`CatalogApi`] for PokeAPI
#[derive(Debug)]
pub struct PokeApiClient {
    http: HttpClient,
    page_limit: u32,
}

impl PokeApiClient {
    /// Create a client from connector configuration
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let http = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::with_http(http, config.page_limit))
    }

    /// Create a client over an existing HTTP client
    pub fn with_http(http: HttpClient, page_limit: u32) -> Self {
        Self { http, page_limit }
    }

    /// Number of records requested per page
    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    async fn list_page(&self, kind: ResourceKind, offset: u32) -> Result<ResourceList> {
        trace!(endpoint = kind.endpoint(), offset, "list_page");

        let request = RequestConfig::new()
            .query("offset", offset.to_string())
            .query("limit", self.page_limit.to_string());
        let response = self.http.get_text(kind.endpoint(), request).await?;

        ResourceList::decode(&response.body)
    }

    async fn get_detail(&self, kind: ResourceKind, key: &LookupKey) -> Result<DetailRecord> {
        trace!(endpoint = kind.endpoint(), key = %key, "get_detail");

        if !key.is_addressable() {
            return Err(Error::config(format!(
                "lookup key '{key}' does not address a single {} record",
                kind.endpoint()
            )));
        }

        let segment = key.as_path_segment();
        let url = self
            .http
            .build_segment_url(&[kind.endpoint(), segment.as_str()])?;
        let response = self.http.get_text(&url, RequestConfig::new()).await?;

        // Unknown names come back as a non-JSON body; decoding surfaces that
        // as a decode error for the not-found classifier.
        DetailRecord::decode(kind, &response.body)
    }
}
