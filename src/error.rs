//! Error types for pokeapi-tables
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::fmt;
use thiserror::Error;

/// The stage of a table operation an error occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetching a page of a listing
    List,
    /// Decoding the next-page cursor of a listing
    ExtractOffset,
    /// Fetching a single detail record
    Get,
}

impl Operation {
    /// Name used in log fields and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::ExtractOffset => "extract_url_offset",
            Self::Get => "get",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for pokeapi-tables
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Invalid page cursor '{cursor}': {message}")]
    CursorParse { cursor: String, message: String },

    // ============================================================================
    // Query Errors
    // ============================================================================
    #[error("Table '{table}' not found")]
    TableNotFound { table: String },

    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    #[error("{table}.{operation}: {source}")]
    Operation {
        table: String,
        operation: Operation,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a cursor parse error
    pub fn cursor_parse(cursor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CursorParse {
            cursor: cursor.into(),
            message: message.into(),
        }
    }

    /// Wrap an error with the table and operation it came from
    pub fn operation(table: impl Into<String>, operation: Operation, source: Error) -> Self {
        Self::Operation {
            table: table.into(),
            operation,
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through operation context
    pub fn root(&self) -> &Error {
        match self {
            Error::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// The operation this error was tagged with, if any
    pub fn failed_operation(&self) -> Option<Operation> {
        match self {
            Error::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Check if this error came from reaching the remote API
    pub fn is_transport(&self) -> bool {
        matches!(
            self.root(),
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_)
        )
    }

    /// Check if this error is a response decode failure
    pub fn is_decode(&self) -> bool {
        matches!(self.root(), Error::Decode { .. })
    }
}

/// Result type alias for pokeapi-tables
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Tag an error with the table and operation that produced it
    fn in_operation(self, table: &str, operation: Operation) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn in_operation(self, table: &str, operation: Operation) -> Result<T> {
        self.map_err(|e| Error::operation(table, operation, e.into()))
    }
}
