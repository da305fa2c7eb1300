//! Remote catalog API module
//!
//! Wire types for list pages and detail records, the [`CatalogApi`] trait
//! the engine calls through, and its HTTP implementation.

mod client;
mod types;

pub use client::{CatalogApi, PokeApiClient};
pub use types::{Berry, DetailRecord, NamedResource, Pokemon, PokemonType, ResourceList};

#[cfg(test)]
mod tests;
