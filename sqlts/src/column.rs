//! Column metadata as reported by `SHOW COLUMNS`

use serde::{Deserialize, Serialize};

/// Metadata for one table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (lower-cased)
    pub field: String,

    /// Full SQL type (lower-cased), e.g. `int(11) unsigned`, `varchar(255)`
    pub sql_type: String,

    /// Whether the column accepts NULL
    pub nullable: bool,

    /// Key designation: `PRI`, `UNI`, `MUL` or empty
    pub key: String,

    /// Default value expression (if any)
    pub default: Option<String>,

    /// Extra information, e.g. `auto_increment`
    pub extra: String,
}

impl Column {
    /// Build a column from the raw `SHOW COLUMNS` text values.
    pub fn from_show_columns(
        field: &str,
        sql_type: &str,
        null: &str,
        key: Option<String>,
        default: Option<String>,
        extra: Option<String>,
    ) -> Self {
        Self {
            field: field.to_lowercase(),
            sql_type: sql_type.to_lowercase(),
            nullable: null.eq_ignore_ascii_case("YES"),
            key: key.unwrap_or_default(),
            default,
            extra: extra.unwrap_or_default(),
        }
    }

    /// Check if this column is part of the primary key
    pub fn is_primary_key(&self) -> bool {
        self.key == "PRI"
    }

    /// Check if this column is auto-increment
    pub fn is_auto_increment(&self) -> bool {
        self.extra.to_lowercase().contains("auto_increment")
    }
}
