//! CLI entry point for sqlts-codegen

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sqlts::MySqlSchema;
use sqlts_codegen::config::defaults;
use sqlts_codegen::{CodegenError, Config};

#[derive(Parser)]
#[command(name = "sqlts-codegen")]
#[command(about = "Generate TypeScript interfaces, types and classes from a MySQL schema")]
#[command(version)]
struct Cli {
    /// Path to configuration file (JSON, or TOML with a .toml extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip prompts; use config.json when no configuration file is given
    #[arg(short, long)]
    silent: bool,

    /// Dry run - print declarations instead of writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declarations (default)
    Generate,
    /// Inspect schema (show tables and columns for debugging)
    Inspect,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {:#}", style("[ERROR]").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let config_path = resolve_config_path(&cli)?;
    let mut config = Config::from_file(&config_path)?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    if cli.dry_run {
        config.dry_run = true;
    }

    info!("Using configuration {}", config_path.display());
    let schema = MySqlSchema::connect(&config.connect, &config.default_db)
        .await
        .map_err(CodegenError::from)?;

    let outcome = match cli.command {
        Some(Commands::Inspect) => inspect_schema(&config, &schema).await,
        Some(Commands::Generate) | None => generate(&config, &schema).await,
    };

    schema.disconnect().await.map_err(CodegenError::from)?;
    outcome
}

/// `--config` wins; `--silent` falls back to the default file; otherwise ask.
fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.config {
        return Ok(path.clone());
    }
    if cli.silent {
        return Ok(PathBuf::from(defaults::CONFIG_FILE));
    }

    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Configuration file")
        .default(defaults::CONFIG_FILE.to_string())
        .interact_text()
        .context("Failed to read configuration path")?;
    Ok(PathBuf::from(path))
}

async fn generate(config: &Config, schema: &MySqlSchema) -> Result<()> {
    let report = sqlts_codegen::generate(config, schema).await?;

    for (table, path) in &report.written {
        println!("  {} {} -> {}", style("✓").green(), table, path.display());
    }
    for table in &report.errored {
        println!("  {} {} (columns unavailable)", style("✗").red(), table);
    }
    for table in &report.failed {
        println!("  {} {} (write failed)", style("✗").red(), table);
    }

    if !report.is_complete() {
        warn!(
            "{} of {} tables were skipped",
            report.errored.len() + report.failed.len(),
            report.written.len() + report.errored.len() + report.failed.len()
        );
    }
    Ok(())
}

async fn inspect_schema(config: &Config, schema: &MySqlSchema) -> Result<()> {
    let tables = sqlts_codegen::fetch_tables(config, schema).await?;

    println!("Resolved {} tables:\n", tables.len());
    for table in &tables {
        println!("Table: {}.{} ({})", table.database, table.name, table.kind);
        println!("  File: {}", table.file);
        if table.err {
            println!("  Columns unavailable");
            println!();
            continue;
        }
        println!("  Columns:");
        for col in &table.columns {
            let nullable = if col.nullable { "NULL" } else { "NOT NULL" };
            let key = if col.key.is_empty() {
                String::new()
            } else {
                format!(" {}", col.key)
            };
            let extra = if col.extra.is_empty() {
                String::new()
            } else {
                format!(" {}", col.extra.to_uppercase())
            };
            println!(
                "    - {} {} {}{}{}",
                col.field, col.sql_type, nullable, key, extra
            );
        }
        if !table.omit.is_empty() {
            println!("  Omit: {:?}", table.omit);
        }
        println!();
    }

    Ok(())
}
