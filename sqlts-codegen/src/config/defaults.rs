//! Default configuration values - single source of truth

/// Default declaration/file suffix
pub const SUFFIX: &str = "model";

/// Default string placed between the table name and suffix in file names
pub const CONNECTOR: &str = "-";

/// Default indentation width for generated properties
pub const TAB_SIZE: usize = 4;

/// Whether table names are converted to the configured case by default
pub const RENAME_TABLE_TO_CASE: bool = true;

/// Whether column names are converted to the configured case by default
pub const RENAME_ATTRIBUTE_TO_CASE: bool = false;

/// Whether nullable columns become optional properties by default
pub const SET_NULL_AS_OPTIONAL: bool = false;

/// Whether `datetime`/`timestamp` columns are typed as `Date` by default
pub const DATE_TIME_AS_DATE: bool = false;

/// Whether `date` columns are typed as `Date` by default
pub const DATE_AS_DATE: bool = false;

/// Whether output files are truncated on first write by default
pub const RE_WRITE: bool = false;

/// Whether views are generated along with tables by default
pub const MODEL_VIEWS: bool = false;

/// Whether every table of the default database is generated by default
pub const ENTIRE_DATABASE: bool = false;

/// Whether classes get a copying constructor by default
pub const CLASS_CONSTRUCTOR: bool = false;

/// Whether classes get SQL statement stubs by default
pub const CLASS_SQL_CRUD: bool = false;

/// Configuration file used when none is given
pub const CONFIG_FILE: &str = "config.json";

/// Extension of generated files
pub const OUTPUT_EXTENSION: &str = "ts";
