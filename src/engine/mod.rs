//! Pagination and hydration engine
//!
//! # Overview
//!
//! The engine module provides:
//! - `Lister` - Streams every summary record of a kind, page by page
//! - `Hydrator` - Fetches detail records by key, on demand
//! - `Sink` - Push interface that lets a consumer stop a listing early

mod hydrator;
mod lister;
mod types;

pub use hydrator::Hydrator;
pub use lister::Lister;
pub use types::{ListStats, Sink, SinkControl};
