//! Table and column definitions
//!
//! A table is one resource kind plus its column list. Each column declares
//! whether its value comes from the list endpoint or needs a detail fetch.

use crate::api::NamedResource;
use crate::error::{Error, Result};
use crate::types::{ColumnType, JsonObject, JsonValue, ResourceKind, Row};
use serde::Serialize;

/// Where a column's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSource {
    /// Available on the summary record of a listing
    List,
    /// Requires fetching the detail record
    Detail,
}

/// A column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub source: ColumnSource,
}

impl ColumnDefinition {
    /// A column filled from summary records
    pub const fn list(
        name: &'static str,
        column_type: ColumnType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            column_type,
            source: ColumnSource::List,
        }
    }

    /// A column filled from detail records
    pub const fn detail(
        name: &'static str,
        column_type: ColumnType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            column_type,
            source: ColumnSource::Detail,
        }
    }

    /// Value of this column on a summary record
    fn summary_value(&self, summary: &NamedResource) -> JsonValue {
        match self.name {
            "name" => JsonValue::String(summary.name.clone()),
            "id" => summary.id().map_or(JsonValue::Null, JsonValue::from),
            _ => JsonValue::Null,
        }
    }
}

/// Descriptor of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub kind: ResourceKind,
    pub columns: &'static [ColumnDefinition],
}

impl TableDefinition {
    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&'static ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Resolve requested column names; an empty request selects every column
    pub fn resolve_columns<S: AsRef<str>>(
        &self,
        requested: &[S],
    ) -> Result<Vec<&'static ColumnDefinition>> {
        if requested.is_empty() {
            return Ok(self.columns.iter().collect());
        }
        requested
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.column(name).ok_or_else(|| Error::ColumnNotFound {
                    table: self.name.to_string(),
                    column: name.to_string(),
                })
            })
            .collect()
    }

    /// Whether any of `columns` needs a detail fetch
    pub fn needs_detail(columns: &[&ColumnDefinition]) -> bool {
        columns.iter().any(|c| c.source == ColumnSource::Detail)
    }

    /// Assemble an output row
    ///
    /// Values come from the detail record when one was fetched, otherwise
    /// from the summary record. Missing values are null.
    pub fn build_row(
        columns: &[&ColumnDefinition],
        summary: Option<&NamedResource>,
        detail: Option<&JsonObject>,
    ) -> Row {
        columns
            .iter()
            .map(|column| {
                let value = match (detail, summary) {
                    (Some(fields), _) => fields.get(column.name).cloned().unwrap_or_default(),
                    (None, Some(summary)) => column.summary_value(summary),
                    (None, None) => JsonValue::Null,
                };
                (column.name.to_string(), value)
            })
            .collect()
    }
}
