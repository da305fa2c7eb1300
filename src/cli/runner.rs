//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectorConfig;
use crate::engine::{Sink, SinkControl};
use crate::error::{Result, ResultExt};
use crate::plugin::{Plugin, QueryContext, PLUGIN_NAME};
use crate::types::{LookupKey, Row};
use serde_json::{json, Value};
use std::io::Write;
use std::str::FromStr;
use tracing::{error, info};

/// Writes rows to stdout as they arrive
struct PrintSink {
    format: OutputFormat,
}

impl PrintSink {
    fn print(&self, value: &Value) -> Result<()> {
        let text = match self.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")?;
        Ok(())
    }
}

impl Sink<Row> for PrintSink {
    fn push(&mut self, row: Row) -> SinkControl {
        match self.print(&Value::Object(row)) {
            Ok(()) => SinkControl::Continue,
            Err(e) => {
                // Usually a closed pipe; nothing more can be written
                error!("Failed to write row: {e}");
                SinkControl::Stop
            }
        }
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Tables => self.tables(),
            Commands::List {
                table,
                columns,
                limit,
            } => self.list(table, columns, *limit).await,
            Commands::Get {
                table,
                key,
                columns,
            } => self.get(table, key, columns).await,
        }
    }

    /// Load configuration
    fn load_config(&self) -> Result<ConnectorConfig> {
        match &self.cli.config {
            Some(path) => ConnectorConfig::from_file(path)
                .context(format!("Invalid configuration in {}", path.display())),
            None => Ok(ConnectorConfig::default()),
        }
    }

    fn plugin(&self) -> Result<Plugin<crate::api::PokeApiClient>> {
        let config = self.load_config()?;
        info!(plugin = PLUGIN_NAME, base_url = %config.base_url, "starting");
        Plugin::from_config(&config)
    }

    fn sink(&self) -> PrintSink {
        PrintSink {
            format: self.cli.format,
        }
    }

    /// Print table definitions
    fn tables(&self) -> Result<()> {
        let plugin = self.plugin()?;
        let sink = self.sink();

        match self.cli.format {
            OutputFormat::Json => {
                for table in plugin.tables() {
                    sink.print(&serde_json::to_value(table)?)?;
                }
            }
            OutputFormat::Pretty => {
                let mut out = std::io::stdout().lock();
                for table in plugin.tables() {
                    writeln!(out, "{}", table.name)?;
                    writeln!(out, "  {}", table.description)?;
                    for column in table.columns {
                        let source = match column.source {
                            crate::tables::ColumnSource::List => "list",
                            crate::tables::ColumnSource::Detail => "detail",
                        };
                        writeln!(
                            out,
                            "    {:<26} {:<7} {:<7} {}",
                            column.name, column.column_type, source, column.description
                        )?;
                    }
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }

    /// Scan a table
    async fn list(&self, table: &str, columns: &[String], limit: Option<usize>) -> Result<()> {
        let plugin = self.plugin()?;
        let mut ctx = QueryContext::new().with_columns(columns.iter().cloned());
        if let Some(limit) = limit {
            ctx = ctx.with_limit(limit);
        }

        let mut sink = self.sink();
        let stats = plugin.list(table, &ctx, &mut sink).await?;
        info!(
            table,
            rows = stats.rows_emitted,
            detail_fetches = stats.detail_fetches,
            skipped = stats.rows_skipped,
            "list complete"
        );
        Ok(())
    }

    /// Look up a single row
    async fn get(&self, table: &str, key: &str, columns: &[String]) -> Result<()> {
        let plugin = self.plugin()?;
        let key = LookupKey::from_str(key).unwrap_or_else(|never| match never {});
        let ctx = QueryContext::new()
            .with_columns(columns.iter().cloned())
            .with_key(key);

        match plugin.get(table, &ctx).await? {
            Some(row) => self.sink().print(&Value::Object(row))?,
            None => {
                info!(table, key = ?ctx.key, "not found");
                if self.cli.format == OutputFormat::Pretty {
                    self.sink().print(&json!(null))?;
                }
            }
        }
        Ok(())
    }
}
