// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # PokeAPI Tables
//!
//! Exposes the public PokeAPI catalog (berries, pokemon, types) as
//! queryable tables.
//!
//! ## Features
//!
//! - **Lazy listing**: pages are fetched only as rows are consumed
//! - **On-demand hydration**: detail records are fetched per row only when a
//!   requested column needs them
//! - **Key lookups**: a single detail fetch by name or id, no listing
//! - **Not-found mapping**: unknown names yield no row instead of an error
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokeapi_tables::{ConnectorConfig, Plugin, QueryContext, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let plugin = Plugin::from_config(&ConnectorConfig::default())?;
//!
//!     let ctx = QueryContext::new().with_columns(["name", "id"]);
//!     let mut rows = Vec::new();
//!     plugin.list("pokemon_type", &ctx, &mut rows).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           Plugin                                │
//! │   tables()    list(table, ctx, sink)    get(table, ctx)         │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────┬──────────────────────────┐
//! │    Tables    │        Engine        │       Not-found          │
//! ├──────────────┼──────────────────────┼──────────────────────────┤
//! │ Columns      │ Lister (pages)       │ Decode error patterns    │
//! │ Row building │ Hydrator (details)   │                          │
//! └──────────────┴──────────┬───────────┴──────────────────────────┘
//!                           │
//! ┌─────────────────────────┴───────────────────────────────────────┐
//! │  CatalogApi  →  HttpClient (rate limit)   Offset extraction     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration
pub mod config;

/// HTTP client with rate limiting
pub mod http;

/// Catalog API wire types and client
pub mod api;

/// Offset pagination
pub mod pagination;

/// Not-found classification of decode errors
pub mod not_found;

/// Lister and hydrator
pub mod engine;

/// Table definitions
pub mod tables;

/// Table plugin entry point
pub mod plugin;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConnectorConfig;
pub use error::{Error, Result};
pub use plugin::{Plugin, QueryContext};
pub use types::{LookupKey, ResourceKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
