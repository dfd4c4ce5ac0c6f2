//! Error types for sqlts

use thiserror::Error;

/// Result type alias for sqlts operations
pub type Result<T> = std::result::Result<T, Error>;

/// MySQL server error: unknown database
pub(crate) const ER_BAD_DB_ERROR: u16 = 1049;
/// MySQL server error: access denied for user to database
pub(crate) const ER_DBACCESS_DENIED_ERROR: u16 = 1044;
/// MySQL server error: table doesn't exist
pub(crate) const ER_NO_SUCH_TABLE: u16 = 1146;
/// MySQL server error: command denied for user on table
pub(crate) const ER_TABLEACCESS_DENIED_ERROR: u16 = 1142;

/// Errors that can occur while introspecting a schema
#[derive(Error, Debug)]
pub enum Error {
    /// MySQL driver error
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Could not open a connection to the server
    #[error("Connection error: {0}")]
    Connection(String),

    /// The requested database does not exist (or is not visible to the user)
    #[error("Database `{0}` does not exist")]
    SchemaNotFound(String),

    /// The table is missing or the user may not read it
    #[error("Table `{table}` not found or access denied: {reason}")]
    TableNotFound { table: String, reason: String },

    /// Row decode error
    #[error("Failed to decode row: {0}")]
    RowDecode(String),
}

impl Error {
    /// Server error code, when the error came back from the MySQL server.
    pub fn server_code(&self) -> Option<u16> {
        match self {
            Error::MySql(mysql_async::Error::Server(server)) => Some(server.code),
            _ => None,
        }
    }

    /// Reclassify a failure raised while selecting `database`.
    pub(crate) fn on_connect(self, database: &str) -> Self {
        match self.server_code() {
            Some(ER_BAD_DB_ERROR) | Some(ER_DBACCESS_DENIED_ERROR) => {
                Error::SchemaNotFound(database.to_string())
            }
            Some(_) => self,
            None => match self {
                Error::MySql(e) => Error::Connection(e.to_string()),
                other => other,
            },
        }
    }

    /// Reclassify a failure raised while reading the columns of `table`.
    pub(crate) fn on_table(self, table: &str) -> Self {
        match self.server_code() {
            Some(ER_NO_SUCH_TABLE) | Some(ER_TABLEACCESS_DENIED_ERROR) | Some(ER_BAD_DB_ERROR) => {
                Error::TableNotFound {
                    table: table.to_string(),
                    reason: self.to_string(),
                }
            }
            _ => self,
        }
    }

    /// Whether this error only concerns a single table.
    pub fn is_table_error(&self) -> bool {
        matches!(self, Error::TableNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(code: u16) -> Error {
        Error::MySql(mysql_async::Error::Server(mysql_async::ServerError {
            code,
            message: format!("server error {}", code),
            state: "42000".to_string(),
        }))
    }

    #[test]
    fn test_unknown_database_is_schema_not_found() {
        let err = server_error(ER_BAD_DB_ERROR).on_connect("shop");
        assert!(matches!(err, Error::SchemaNotFound(ref db) if db == "shop"));
    }

    #[test]
    fn test_missing_table_is_table_not_found() {
        let err = server_error(ER_NO_SUCH_TABLE).on_table("users");
        assert!(err.is_table_error());
        assert!(err.to_string().contains("users"));

        let err = server_error(ER_TABLEACCESS_DENIED_ERROR).on_table("secrets");
        assert!(err.is_table_error());
    }

    #[test]
    fn test_other_server_errors_pass_through() {
        let err = server_error(1064).on_table("users");
        assert_eq!(err.server_code(), Some(1064));
        assert!(!err.is_table_error());
    }
}
