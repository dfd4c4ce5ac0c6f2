//! sqlts-codegen: Generate TypeScript models from a live MySQL schema
//!
//! This crate provides both a CLI tool and a library. It reads a JSON (or
//! TOML) configuration, introspects the configured tables through a
//! [`sqlts::SchemaSource`] and writes one declaration per table:
//!
//! - `export interface UsersModel { ... }`
//! - `export type UsersModel = { ... };`
//! - `export class UsersModel { ... }`, optionally with a copying constructor
//!   and static SQL statements
//!
//! # Configuration
//!
//! ```json
//! {
//!     "driver": "mysql",
//!     "driverOptions": { "host": "localhost", "user": "root" },
//!     "dir": "./src/models",
//!     "defaultDb": "shop",
//!     "tables": ["users", { "name": "orders", "type": "class", "omit": ["^internal_"] }]
//! }
//! ```
//!
//! # Programmatic use
//!
//! ```rust,ignore
//! use sqlts::MySqlSchema;
//! use sqlts_codegen::Config;
//!
//! async fn run() -> anyhow::Result<()> {
//!     let config = Config::from_file("config.json".as_ref())?;
//!     let schema = MySqlSchema::connect(&config.connect, &config.default_db).await?;
//!     let report = sqlts_codegen::generate(&config, &schema).await?;
//!     schema.disconnect().await?;
//!     println!("{} declarations written", report.written.len());
//!     Ok(())
//! }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! sqlts-codegen --config config.json
//! sqlts-codegen --silent --dry-run
//! sqlts-codegen --config config.json inspect
//! ```

pub mod codegen;
pub mod config;
pub mod error;

use std::path::PathBuf;

use sqlts::SchemaSource;
use tracing::{debug, error, info};

pub use config::{parse_config, Config, OutputKind, TableDescriptor};
pub use error::{CodegenError, Result};

use codegen::{render_table, FileWriter};
use config::table_from_name;

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Tables written, with the file each went to
    pub written: Vec<(String, PathBuf)>,

    /// Tables whose columns could not be fetched
    pub errored: Vec<String>,

    /// Tables whose output file could not be written
    pub failed: Vec<String>,
}

impl GenerationReport {
    /// True when every table made it to disk
    pub fn is_complete(&self) -> bool {
        self.errored.is_empty() && self.failed.is_empty()
    }
}

/// Main entry point for code generation
///
/// Tables are processed one at a time. A table that is missing or unreadable,
/// or whose file cannot be written, is reported and skipped; connection and
/// schema failures abort the run.
pub async fn generate<S>(config: &Config, source: &S) -> Result<GenerationReport>
where
    S: SchemaSource + ?Sized,
{
    let tables = fetch_tables(config, source).await?;
    info!(
        "Generating {} declarations in {}",
        tables.len(),
        config.dir.display()
    );

    let mut writer = FileWriter::new(&config.dir, config.re_write).dry_run(config.dry_run);
    let mut report = GenerationReport::default();

    for table in &tables {
        if table.err {
            report.errored.push(table.name.clone());
            continue;
        }

        let code = render_table(table, config)?;
        match writer.write(&table.file, &code) {
            Ok(path) => {
                debug!("Generated {} -> {}", table.name, path.display());
                report.written.push((table.name.clone(), path));
            }
            Err(e) if e.is_recoverable() => {
                error!("Skipping table {}: {}", table.name, e);
                report.failed.push(table.name.clone());
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Code generation complete: {} written, {} errored, {} failed",
        report.written.len(),
        report.errored.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Resolve the tables for this run and fetch their columns.
///
/// Tables that are missing or unreadable come back with `err` set and no
/// columns; any other fetch failure aborts.
pub async fn fetch_tables<S>(config: &Config, source: &S) -> Result<Vec<TableDescriptor>>
where
    S: SchemaSource + ?Sized,
{
    let mut tables = resolve_run_tables(config, source).await?;

    for table in &mut tables {
        debug!("Fetching columns for {}.{}", table.database, table.name);
        match source.fetch_columns(&table.database, &table.name).await {
            Ok(columns) => table.columns = columns,
            Err(e) if e.is_table_error() => {
                error!("Skipping table {}: {}", table.name, CodegenError::from(e));
                table.err = true;
            }
            Err(e) => return Err(CodegenError::from(e)),
        }
    }

    Ok(tables)
}

/// Tables to process, in order.
///
/// With `entireDatabase`, every table of the default database (and views when
/// `modelViews` is set) is used, taking the configured entry of the same name
/// when there is one; configured entries the listing does not mention follow.
/// Otherwise the configured tables are used as-is.
pub async fn resolve_run_tables<S>(config: &Config, source: &S) -> Result<Vec<TableDescriptor>>
where
    S: SchemaSource + ?Sized,
{
    if !config.entire_database {
        return Ok(config.tables.clone());
    }

    let listed = source
        .list_tables(&config.default_db, config.model_views)
        .await?;
    info!("Found {} tables in {}", listed.len(), config.default_db);

    let mut tables: Vec<TableDescriptor> = listed
        .iter()
        .map(|name| {
            config
                .table(name)
                .cloned()
                .unwrap_or_else(|| table_from_name(name, config))
        })
        .collect();
    tables.extend(
        config
            .tables
            .iter()
            .filter(|t| !listed.contains(&t.name))
            .cloned(),
    );

    Ok(tables)
}
