//! Configuration settings for sqlts-codegen

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::Value;
use sqlts::ConnectOptions;

use super::defaults;
use super::options::{
    given_string, take_bool, take_choice, take_string, take_usize, type_name, Object,
};
use super::table::{resolve_table, OutputKind, TableDescriptor};
use crate::codegen::{Case, DateMapping};
use crate::error::{CodegenError, Result};

/// Supported database drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Driver {
    #[default]
    Mysql,
}

impl Driver {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mysql" => Some(Driver::Mysql),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defaults for `class` outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOptions {
    pub constructor: bool,
    pub sql_crud: bool,
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self {
            constructor: defaults::CLASS_CONSTRUCTOR,
            sql_crud: defaults::CLASS_SQL_CRUD,
        }
    }
}

/// Main configuration struct for code generation
#[derive(Debug, Clone)]
pub struct Config {
    /// Database driver
    pub driver: Driver,

    /// How to reach the server
    pub connect: ConnectOptions,

    /// Output directory
    pub dir: PathBuf,

    /// Database used for tables that do not name one
    pub default_db: String,

    /// Generate every table of `default_db`
    pub entire_database: bool,

    /// Naming convention for converted names
    pub case: Case,

    /// Declaration kind for tables that do not name one
    pub default_type: OutputKind,

    pub default_suffix: String,

    pub default_connector: String,

    /// Indentation width of generated properties
    pub tab_size: usize,

    pub rename_table_to_case: bool,

    pub rename_attribute_to_case: bool,

    /// Nullable columns become optional (`?:`) properties
    pub set_null_as_optional: bool,

    pub date_time_as_date: bool,

    pub date_as_date: bool,

    /// Include views when listing the entire database
    pub model_views: bool,

    /// Truncate each output file the first time a run writes it
    pub re_write: bool,

    pub class_options: ClassOptions,

    /// Resolved table descriptors, in configuration order
    pub tables: Vec<TableDescriptor>,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    pub log_level: Option<String>,

    /// Dry run mode - print declarations instead of writing files
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driver: Driver::default(),
            connect: ConnectOptions::new(String::new(), String::new()),
            dir: PathBuf::new(),
            default_db: String::new(),
            entire_database: defaults::ENTIRE_DATABASE,
            case: Case::default(),
            default_type: OutputKind::default(),
            default_suffix: defaults::SUFFIX.to_string(),
            default_connector: defaults::CONNECTOR.to_string(),
            tab_size: defaults::TAB_SIZE,
            rename_table_to_case: defaults::RENAME_TABLE_TO_CASE,
            rename_attribute_to_case: defaults::RENAME_ATTRIBUTE_TO_CASE,
            set_null_as_optional: defaults::SET_NULL_AS_OPTIONAL,
            date_time_as_date: defaults::DATE_TIME_AS_DATE,
            date_as_date: defaults::DATE_AS_DATE,
            model_views: defaults::MODEL_VIEWS,
            re_write: defaults::RE_WRITE,
            class_options: ClassOptions::default(),
            tables: Vec::new(),
            log_level: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    ///
    /// Files ending in `.toml` are read as TOML, everything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let raw: Value = if is_toml {
            let value: toml::Value = toml::from_str(&content).map_err(|e| {
                CodegenError::ConfigError(format!(
                    "Failed to parse config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            serde_json::to_value(value)?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                CodegenError::ConfigError(format!(
                    "Failed to parse config file {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        parse_config(&raw)
    }

    /// Which temporal columns render as `Date`
    pub fn date_mapping(&self) -> DateMapping {
        DateMapping {
            date_time_as_date: self.date_time_as_date,
            date_as_date: self.date_as_date,
        }
    }

    /// Descriptor for `name`, if the configuration lists it.
    pub fn table(&self, name: &str) -> Option<&TableDescriptor> {
        self.tables.iter().find(|t| t.name == name)
    }
}

fn invalid(message: impl Into<String>) -> CodegenError {
    CodegenError::ValidationError(message.into())
}

/// Validate a raw configuration object and build the [`Config`].
///
/// Required settings are checked first; every optional setting is then
/// taken when well typed and otherwise left at its default.
pub fn parse_config(raw: &Value) -> Result<Config> {
    let empty = Object::new();
    let opt = raw.as_object().unwrap_or(&empty);

    let driver_name =
        given_string(opt, "driver").ok_or_else(|| invalid("Database driver not specified"))?;
    let driver_options = opt
        .get("driverOptions")
        .and_then(Value::as_object)
        .ok_or_else(|| invalid("driverOptions not specified"))?;
    let driver = Driver::from_name(driver_name)
        .ok_or_else(|| invalid(format!("Unrecognized database driver {}", driver_name)))?;
    let connect = match driver {
        Driver::Mysql => mysql_options(driver_options)?,
    };

    let dir = given_string(opt, "dir").ok_or_else(|| invalid("Output directory not specified"))?;
    let default_db =
        given_string(opt, "defaultDb").ok_or_else(|| invalid("Default database not specified"))?;

    let entire_database = take_bool(opt, "entireDatabase", defaults::ENTIRE_DATABASE);
    match opt.get("tables") {
        Some(tables) if !entire_database => check_tables(tables)?,
        Some(Value::Array(entries)) => check_table_entries(entries)?,
        None if !entire_database => return Err(invalid("Tables not specified")),
        _ => {}
    }

    let mut config = Config {
        driver,
        connect,
        dir: PathBuf::from(dir),
        default_db: default_db.to_string(),
        entire_database,
        ..Config::default()
    };

    if let Some(class_options) = opt.get("classOptions").and_then(Value::as_object) {
        config.class_options = ClassOptions {
            constructor: take_bool(class_options, "constructor", config.class_options.constructor),
            sql_crud: take_bool(class_options, "sqlCRUD", config.class_options.sql_crud),
        };
    }

    config.case = take_choice(opt, "case", Case::from_name, config.case);
    config.rename_table_to_case =
        take_bool(opt, "renameTableToCase", config.rename_table_to_case);
    config.rename_attribute_to_case =
        take_bool(opt, "renameAttributeToCase", config.rename_attribute_to_case);
    config.set_null_as_optional = take_bool(opt, "setNullAsOptional", config.set_null_as_optional);
    config.date_time_as_date = take_bool(opt, "dateTimeAsDate", config.date_time_as_date);
    config.date_as_date = take_bool(opt, "dateAsDate", config.date_as_date);
    config.default_type = take_choice(opt, "defaultType", OutputKind::from_name, config.default_type);
    config.tab_size = take_usize(opt, "tabSize", config.tab_size);
    config.model_views = take_bool(opt, "modelViews", config.model_views);
    config.default_connector = take_string(opt, "defaultConnector", &config.default_connector);
    config.default_suffix = take_string(opt, "defaultSuffix", &config.default_suffix);
    config.re_write = take_bool(opt, "reWrite", config.re_write);
    config.log_level = given_string(opt, "logLevel").map(str::to_string);

    if let Some(Value::Array(entries)) = opt.get("tables") {
        let mut tables = Vec::with_capacity(entries.len());
        for entry in entries {
            tables.push(resolve_table(entry, &config)?);
        }
        config.tables = tables;
    }

    for table in &config.tables {
        for pattern in &table.omit {
            Regex::new(pattern).map_err(|e| {
                invalid(format!(
                    "Invalid omit pattern `{}` for table {}: {}",
                    pattern, table.name, e
                ))
            })?;
        }
    }

    Ok(config)
}

/// Connection settings for the `mysql` driver: `host` and `user` required.
fn mysql_options(raw: &Object) -> Result<ConnectOptions> {
    let host = given_string(raw, "host").ok_or_else(|| invalid("No host specified"))?;
    let user = given_string(raw, "user").ok_or_else(|| invalid("No user specified"))?;

    let mut options = ConnectOptions::new(host, user);
    if let Some(password) = given_string(raw, "password") {
        options = options.password(password);
    }
    if let Some(port) = raw
        .get("port")
        .and_then(Value::as_u64)
        .and_then(|p| u16::try_from(p).ok())
    {
        options = options.port(port);
    }
    if let Some(socket) = given_string(raw, "socketPath") {
        options = options.socket_path(socket);
    }
    Ok(options)
}

fn check_tables(tables: &Value) -> Result<()> {
    let entries = tables
        .as_array()
        .ok_or_else(|| invalid("Tables must be an array"))?;
    if entries.is_empty() {
        return Err(invalid("Tables array empty"));
    }
    check_table_entries(entries)
}

fn check_table_entries(entries: &[Value]) -> Result<()> {
    for (idx, entry) in entries.iter().enumerate() {
        match entry {
            Value::String(name) if name.is_empty() => {
                return Err(invalid(format!("Empty item in tables at index {}", idx)));
            }
            Value::String(_) => {}
            Value::Object(raw) => {
                if given_string(raw, "name").is_none() {
                    return Err(invalid(format!("Table name not given at index {}", idx)));
                }
            }
            other => {
                return Err(invalid(format!(
                    "Elements of tables cannot have items of type {}",
                    type_name(other)
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "driver": "mysql",
            "driverOptions": { "host": "localhost", "user": "root" },
            "dir": "./models",
            "defaultDb": "shop",
            "tables": ["users"],
        })
    }

    fn error_message(raw: Value) -> String {
        match parse_config(&raw) {
            Err(CodegenError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn without(key: &str) -> Value {
        let mut raw = minimal();
        raw.as_object_mut().unwrap().remove(key);
        raw
    }

    fn with(key: &str, value: Value) -> Value {
        let mut raw = minimal();
        raw.as_object_mut().unwrap().insert(key.to_string(), value);
        raw
    }

    #[test]
    fn test_empty_config_cites_driver() {
        assert!(error_message(json!({})).contains("driver"));
    }

    #[test]
    fn test_required_settings() {
        assert!(error_message(without("driverOptions")).contains("driverOptions"));
        assert!(error_message(with("driverOptions", json!("localhost"))).contains("driverOptions"));
        assert!(error_message(with("driver", json!("postgres"))).contains("postgres"));
        assert!(error_message(with("driverOptions", json!({ "user": "root" }))).contains("host"));
        assert!(error_message(with("driverOptions", json!({ "host": "db" }))).contains("user"));
        assert!(error_message(without("dir")).contains("directory"));
        assert!(error_message(without("defaultDb")).contains("database"));
    }

    #[test]
    fn test_tables_validation() {
        assert!(error_message(without("tables")).contains("Tables not specified"));
        assert!(error_message(with("tables", json!({ "users": {} }))).contains("array"));
        assert!(error_message(with("tables", json!([]))).contains("empty"));
        assert!(error_message(with("tables", json!(["users", ""]))).contains("index 1"));
        assert!(error_message(with("tables", json!([{ "type": "class" }]))).contains("name"));
        assert!(error_message(with("tables", json!([true]))).contains("boolean"));
    }

    #[test]
    fn test_entire_database_does_not_need_tables() {
        let mut raw = without("tables");
        raw["entireDatabase"] = json!(true);
        let config = parse_config(&raw).unwrap();
        assert!(config.entire_database);
        assert!(config.tables.is_empty());

        raw["tables"] = json!([]);
        assert!(parse_config(&raw).is_ok());
    }

    #[test]
    fn test_defaults_are_kept() {
        let config = parse_config(&minimal()).unwrap();
        assert_eq!(config.driver, Driver::Mysql);
        assert_eq!(config.connect.host, "localhost");
        assert_eq!(config.connect.port, sqlts::mysql::DEFAULT_PORT);
        assert_eq!(config.dir, PathBuf::from("./models"));
        assert_eq!(config.default_db, "shop");
        assert_eq!(config.case, Case::Camel);
        assert_eq!(config.default_type, OutputKind::Interface);
        assert_eq!(config.default_suffix, "model");
        assert_eq!(config.default_connector, "-");
        assert_eq!(config.tab_size, 4);
        assert!(config.rename_table_to_case);
        assert!(!config.rename_attribute_to_case);
        assert!(!config.re_write);
        assert!(config.log_level.is_none());
        assert_eq!(config.tables.len(), 1);
        assert_eq!(config.tables[0].file, "users-model");
    }

    #[test]
    fn test_options_are_copied() {
        let mut raw = minimal();
        let obj = raw.as_object_mut().unwrap();
        obj.insert("case".into(), json!("pascal"));
        obj.insert("defaultType".into(), json!("class"));
        obj.insert("tabSize".into(), json!(2));
        obj.insert("renameTableToCase".into(), json!(false));
        obj.insert("renameAttributeToCase".into(), json!(true));
        obj.insert("setNullAsOptional".into(), json!(true));
        obj.insert("defaultSuffix".into(), json!("entity"));
        obj.insert("defaultConnector".into(), json!("."));
        obj.insert("reWrite".into(), json!(true));
        obj.insert("logLevel".into(), json!("warn"));
        obj.insert("classOptions".into(), json!({ "constructor": true, "sqlCRUD": "no" }));
        obj.insert(
            "driverOptions".into(),
            json!({ "host": "db", "user": "app", "password": "pw", "port": 3307 }),
        );

        let config = parse_config(&raw).unwrap();
        assert_eq!(config.case, Case::Pascal);
        assert_eq!(config.default_type, OutputKind::Class);
        assert_eq!(config.tab_size, 2);
        assert!(!config.rename_table_to_case);
        assert!(config.rename_attribute_to_case);
        assert!(config.set_null_as_optional);
        assert!(config.re_write);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert!(config.class_options.constructor);
        assert!(!config.class_options.sql_crud);
        assert_eq!(config.connect.password.as_deref(), Some("pw"));
        assert_eq!(config.connect.port, 3307);

        // Table defaults follow the parsed options
        let users = config.table("users").unwrap();
        assert_eq!(users.kind, OutputKind::Class);
        assert_eq!(users.file, "users.Entity");
        assert!(users.constructor);
    }

    #[test]
    fn test_disallowed_choices_keep_defaults() {
        let mut raw = with("case", json!("kebab"));
        raw["defaultType"] = json!("enum");
        raw["tabSize"] = json!("wide");
        let config = parse_config(&raw).unwrap();
        assert_eq!(config.case, Case::Camel);
        assert_eq!(config.default_type, OutputKind::Interface);
        assert_eq!(config.tab_size, 4);
    }

    #[test]
    fn test_invalid_omit_pattern() {
        let raw = with("tables", json!([{ "name": "users", "omit": ["(unclosed"] }]));
        assert!(error_message(raw).contains("(unclosed"));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, minimal().to_string()).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.default_db, "shop");
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqlts.toml");
        std::fs::write(
            &path,
            r#"
                driver = "mysql"
                dir = "./models"
                defaultDb = "shop"
                tabSize = 2
                tables = ["users", { name = "orders", type = "class" }]

                [driverOptions]
                host = "localhost"
                user = "root"
            "#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.tab_size, 2);
        assert_eq!(config.tables.len(), 2);
        assert_eq!(config.table("orders").unwrap().kind, OutputKind::Class);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, CodegenError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ driver: mysql").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, CodegenError::ConfigError(_)));
    }
}
