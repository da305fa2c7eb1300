//! Common types used throughout pokeapi-tables
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single output row, keyed by column name
pub type Row = JsonObject;

// ============================================================================
// Resource Kind
// ============================================================================

/// The catalog categories served as tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Berry,
    Pokemon,
    Type,
}

impl ResourceKind {
    /// All kinds, in table registration order
    pub const ALL: [ResourceKind; 3] = [Self::Berry, Self::Pokemon, Self::Type];

    /// Path segment of the list/detail endpoints
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Berry => "berry",
            Self::Pokemon => "pokemon",
            Self::Type => "type",
        }
    }

    /// Name of the table exposing this kind
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Berry => "pokemon_berry",
            Self::Pokemon => "pokemon_pokemon",
            Self::Type => "pokemon_type",
        }
    }

    /// Resolve a kind from its table name
    pub fn from_table_name(table: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.table_name() == table)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

// ============================================================================
// Lookup Key
// ============================================================================

/// Key used to address a single resource on its detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// Resource name, e.g. `fire`
    Name(String),
    /// Numeric resource id
    Id(i64),
}

impl LookupKey {
    /// Create a name key
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Path segment for the detail endpoint
    pub fn as_path_segment(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Id(id) => id.to_string(),
        }
    }

    /// Whether the key can name a single detail record
    ///
    /// Blank names and the dot segments `.`/`..` cannot; a request for them
    /// would resolve to the list endpoint instead.
    pub fn is_addressable(&self) -> bool {
        match self {
            Self::Name(name) => !matches!(name.trim(), "" | "." | ".."),
            Self::Id(_) => true,
        }
    }
}

impl FromStr for LookupKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<i64>() {
                return Ok(Self::Id(id));
            }
        }
        Ok(Self::Name(trimmed.to_string()))
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_segment())
    }
}

// ============================================================================
// Column Type
// ============================================================================

/// Logical type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    String,
    Int,
    Bool,
    Json,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "STRING",
            Self::Int => "INT",
            Self::Bool => "BOOL",
            Self::Json => "JSON",
        };
        f.pad(name)
    }
}
