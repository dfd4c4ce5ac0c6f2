//! Error types for sqlts-codegen

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sqlts-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Database `{0}` does not exist")]
    SchemaNotFound(String),

    #[error("Cannot read table `{table}`: {reason}")]
    TableAccess { table: String, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Whether the pipeline may skip the current table and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CodegenError::TableAccess { .. } | CodegenError::FileWrite { .. }
        )
    }
}

impl From<sqlts::Error> for CodegenError {
    fn from(err: sqlts::Error) -> Self {
        match err {
            sqlts::Error::SchemaNotFound(db) => CodegenError::SchemaNotFound(db),
            sqlts::Error::TableNotFound { table, reason } => {
                CodegenError::TableAccess { table, reason }
            }
            other => CodegenError::ConnectionError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
