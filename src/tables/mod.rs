//! Table definitions
//!
//! One table per resource kind. Every table shares the same engine; they
//! differ only in kind and column list.

mod berry;
mod pokemon;
mod pokemon_type;
mod types;

pub use types::{ColumnDefinition, ColumnSource, TableDefinition};

use crate::types::ResourceKind;

/// Definition of the table serving `kind`
pub fn table_for(kind: ResourceKind) -> TableDefinition {
    match kind {
        ResourceKind::Berry => berry::table(),
        ResourceKind::Pokemon => pokemon::table(),
        ResourceKind::Type => pokemon_type::table(),
    }
}

/// All table definitions, in registration order
pub fn all_tables() -> Vec<TableDefinition> {
    ResourceKind::ALL.into_iter().map(table_for).collect()
}

#[cfg(test)]
mod tests;
