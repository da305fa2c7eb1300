//! CLI module
//!
//! Command-line interface for querying the catalog tables.
//!
//! # Commands
//!
//! - `tables` - List tables and their columns
//! - `list` - Scan a table
//! - `get` - Look up one row by name or id

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
