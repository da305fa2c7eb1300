//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query the PokeAPI catalog as tables
#[derive(Parser, Debug)]
#[command(name = "pokeapi-tables")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available tables and their columns
    Tables,

    /// Scan every row of a table
    List {
        /// Table name, e.g. pokemon_type
        table: String,

        /// Columns to return (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Maximum number of rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fetch a single row by name or id
    Get {
        /// Table name, e.g. pokemon_type
        table: String,

        /// Resource name or numeric id
        key: String,

        /// Columns to return (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one row per line)
    Json,
    /// Human-readable output
    Pretty,
}
