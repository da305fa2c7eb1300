//! In-memory catalog used by unit tests

use crate::api::{CatalogApi, DetailRecord, NamedResource, ResourceList};
use crate::error::{Error, Result};
use crate::types::{LookupKey, ResourceKind};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

pub(crate) const BASE: &str = "https://pokeapi.co/api/v2";

/// Serves the same ordered name list for every kind, `page_size` at a time
pub(crate) struct MockCatalog {
    names: Vec<String>,
    page_size: u32,
    cursor_override: Option<(u32, String)>,
    fail_list_at: Option<u32>,
    broken: Vec<String>,
    missing: Vec<String>,
    list_offsets: Mutex<Vec<u32>>,
    detail_keys: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub(crate) fn new(names: &[&str], page_size: u32) -> Self {
        Self {
            names: names.iter().map(ToString::to_string).collect(),
            page_size,
            cursor_override: None,
            fail_list_at: None,
            broken: Vec::new(),
            missing: Vec::new(),
            list_offsets: Mutex::new(Vec::new()),
            detail_keys: Mutex::new(Vec::new()),
        }
    }

    /// `n` names `item-0`, `item-1`, ...
    pub(crate) fn sized(n: usize, page_size: u32) -> Self {
        let names: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::new(&refs, page_size)
    }

    /// Replace the next cursor of the page at `offset`
    pub(crate) fn with_cursor_at(mut self, offset: u32, cursor: &str) -> Self {
        self.cursor_override = Some((offset, cursor.to_string()));
        self
    }

    /// Fail the list call at `offset` with a server error
    pub(crate) fn failing_list_at(mut self, offset: u32) -> Self {
        self.fail_list_at = Some(offset);
        self
    }

    /// Fail detail calls for `name` with a server error
    pub(crate) fn with_broken(mut self, name: &str) -> Self {
        self.broken.push(name.to_string());
        self
    }

    /// Keep `name` listed but answer its detail lookup as unknown
    pub(crate) fn with_missing(mut self, name: &str) -> Self {
        self.missing.push(name.to_string());
        self
    }

    pub(crate) fn list_offsets(&self) -> Vec<u32> {
        self.list_offsets.lock().unwrap().clone()
    }

    pub(crate) fn detail_keys(&self) -> Vec<String> {
        self.detail_keys.lock().unwrap().clone()
    }

    fn url(kind: ResourceKind, id: usize) -> String {
        format!("{BASE}/{}/{id}/", kind.endpoint())
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn list_page(&self, kind: ResourceKind, offset: u32) -> Result<ResourceList> {
        self.list_offsets.lock().unwrap().push(offset);
        if self.fail_list_at == Some(offset) {
            return Err(Error::http_status(500, "internal error"));
        }

        let start = (offset as usize).min(self.names.len());
        let end = (start + self.page_size as usize).min(self.names.len());
        let results = self.names[start..end]
            .iter()
            .enumerate()
            .map(|(i, name)| NamedResource::new(name.as_str(), Self::url(kind, start + i + 1)))
            .collect();

        let mut next = (end < self.names.len()).then(|| {
            format!(
                "{BASE}/{}?offset={end}&limit={}",
                kind.endpoint(),
                self.page_size
            )
        });
        if let Some((at, cursor)) = &self.cursor_override {
            if *at == offset {
                next = Some(cursor.clone());
            }
        }

        Ok(ResourceList {
            count: self.names.len() as u64,
            next,
            previous: None,
            results,
        })
    }

    async fn get_detail(&self, kind: ResourceKind, key: &LookupKey) -> Result<DetailRecord> {
        let segment = key.as_path_segment();
        self.detail_keys.lock().unwrap().push(segment.clone());

        if self.broken.contains(&segment) {
            return Err(Error::http_status(502, "bad gateway"));
        }

        let position = match key {
            LookupKey::Name(name) => self.names.iter().position(|n| n == name),
            LookupKey::Id(id) => usize::try_from(*id)
                .ok()
                .filter(|id| (1..=self.names.len()).contains(id))
                .map(|id| id - 1),
        };
        let position = position.filter(|i| !self.missing.contains(&self.names[*i]));
        let Some(index) = position else {
            // What the real API sends for unknown names
            return DetailRecord::decode(kind, "Not Found");
        };

        let body = json!({
            "id": index + 1,
            "name": self.names[index],
            "generation": {"name": "generation-i", "url": format!("{BASE}/generation/1/")},
            "growth_time": 3,
            "height": 7,
        });
        DetailRecord::decode(kind, &body.to_string())
    }
}
