//! Table descriptors: one table-to-file mapping each

use std::fmt;

use serde_json::Value;
use sqlts::Column;

use super::options::{
    given_non_empty, given_string, take_bool, take_choice, take_string, take_string_list,
    type_name,
};
use super::settings::Config;
use crate::codegen::convert_case;
use crate::error::{CodegenError, Result};

/// Kind of TypeScript declaration generated for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Interface,
    Class,
    Type,
}

impl OutputKind {
    /// Accepted configuration values, in allow-list order
    pub const NAMES: [&'static str; 3] = ["interface", "class", "type"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "interface" => Some(OutputKind::Interface),
            "class" => Some(OutputKind::Class),
            "type" => Some(OutputKind::Type),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Interface => "interface",
            OutputKind::Class => "class",
            OutputKind::Type => "type",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved table-to-file mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name as known to the server
    pub name: String,

    /// Declaration kind
    pub kind: OutputKind,

    /// Database holding the table
    pub database: String,

    /// Suffix appended to the declaration and file names
    pub suffix: String,

    /// String between table name and suffix in the file name
    pub connector: String,

    /// Output file, relative to the output directory, without extension
    pub file: String,

    /// Regex patterns; matching columns are left out
    pub omit: Vec<String>,

    /// Emit a copying constructor (classes only)
    pub constructor: bool,

    /// Emit SQL statement stubs (classes only)
    pub sql_crud: bool,

    /// Set when the column fetch for this table failed
    pub err: bool,

    /// Columns, filled in by the pipeline
    pub columns: Vec<Column>,
}

impl TableDescriptor {
    /// Whether a constructor block is rendered
    pub fn generates_constructor(&self) -> bool {
        self.kind == OutputKind::Class && self.constructor
    }

    /// Whether SQL statement stubs are rendered
    pub fn generates_crud(&self) -> bool {
        self.kind == OutputKind::Class && self.sql_crud
    }
}

/// File name (without extension) for a table: name, connector, suffix.
///
/// The table name is converted to the configured case when
/// `renameTableToCase` is set; the suffix always is.
pub fn derive_file_name(name: &str, connector: &str, suffix: &str, config: &Config) -> String {
    let base = if config.rename_table_to_case {
        convert_case(config.case, name)
    } else {
        name.to_string()
    };
    format!("{}{}{}", base, connector, convert_case(config.case, suffix))
}

/// Descriptor for a table given by bare name: everything from defaults.
pub fn table_from_name(name: &str, config: &Config) -> TableDescriptor {
    TableDescriptor {
        name: name.to_string(),
        kind: config.default_type,
        database: config.default_db.clone(),
        suffix: config.default_suffix.clone(),
        connector: config.default_connector.clone(),
        file: derive_file_name(
            name,
            &config.default_connector,
            &config.default_suffix,
            config,
        ),
        omit: Vec::new(),
        constructor: config.class_options.constructor,
        sql_crud: config.class_options.sql_crud,
        err: false,
        columns: Vec::new(),
    }
}

/// Resolve one entry of `tables`: a bare name or an override object.
///
/// Override fields that are missing or mistyped fall back to the
/// configuration defaults; a missing `file` is the raw table name.
pub fn resolve_table(entry: &Value, config: &Config) -> Result<TableDescriptor> {
    let raw = match entry {
        Value::String(name) => return Ok(table_from_name(name, config)),
        Value::Object(raw) => raw,
        other => {
            return Err(CodegenError::ValidationError(format!(
                "Elements of tables cannot have items of type {}",
                type_name(other)
            )))
        }
    };

    let name = given_string(raw, "name")
        .ok_or_else(|| CodegenError::ValidationError("Table name not given".into()))?;

    let suffix = take_string(raw, "suffix", &config.default_suffix);
    let connector = take_string(raw, "connector", &config.default_connector);
    let file = given_non_empty(raw, "file").unwrap_or(name).to_string();

    Ok(TableDescriptor {
        name: name.to_string(),
        kind: take_choice(raw, "type", OutputKind::from_name, config.default_type),
        database: given_non_empty(raw, "database")
            .unwrap_or(&config.default_db)
            .to_string(),
        suffix,
        connector,
        file,
        omit: take_string_list(raw, "omit", &[]),
        constructor: take_bool(raw, "constructor", config.class_options.constructor),
        sql_crud: take_bool(raw, "sqlCRUD", config.class_options.sql_crud),
        err: false,
        columns: Vec::new(),
    })
}
