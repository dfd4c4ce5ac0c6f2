//! Live schema introspection against a MySQL server

use crate::column::Column;
use crate::error::{Error, Result};
use crate::source::SchemaSource;
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Pool as MysqlAsyncPool, Row as MySqlAsyncRow};
use tracing::{debug, info};

use super::options::ConnectOptions;
use super::row;

/// `Table_type` value reported for views by `SHOW FULL TABLES`
const VIEW_TABLE_TYPE: &str = "VIEW";

/// A connected MySQL schema.
///
/// # Example
///
/// ```ignore
/// use sqlts::{ConnectOptions, MySqlSchema, SchemaSource};
///
/// let schema = MySqlSchema::connect(&ConnectOptions::new("localhost", "root"), "shop").await?;
/// for table in schema.list_tables("shop", false).await? {
///     let columns = schema.fetch_columns("shop", &table).await?;
///     println!("{}: {} columns", table, columns.len());
/// }
/// schema.disconnect().await?;
/// ```
pub struct MySqlSchema {
    pool: MysqlAsyncPool,
    database: String,
}

impl MySqlSchema {
    /// Connect to the server and select `database`.
    ///
    /// Fails with [`Error::SchemaNotFound`] when the database does not exist
    /// and [`Error::Connection`] when the server cannot be reached.
    pub async fn connect(options: &ConnectOptions, database: &str) -> Result<Self> {
        debug!(
            "Connecting to {}@{}:{} (database {})",
            options.user, options.host, options.port, database
        );
        let pool = MysqlAsyncPool::new(options.to_opts(database));

        // Checking out a connection performs the handshake and `USE database`.
        match pool.get_conn().await {
            Ok(conn) => drop(conn),
            Err(e) => {
                if let Err(disconnect_err) = pool.disconnect().await {
                    debug!("Pool disconnect after failed connect: {}", disconnect_err);
                }
                return Err(Error::from(e).on_connect(database));
            }
        }

        info!("Connected to database `{}`", database);
        Ok(Self {
            pool,
            database: database.to_string(),
        })
    }

    /// The database selected on connect.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Disconnect and drop the pool.
    pub async fn disconnect(self) -> Result<()> {
        self.pool.disconnect().await?;
        Ok(())
    }

    async fn query_rows(&self, sql: String) -> Result<Vec<MySqlAsyncRow>> {
        debug!("{}", sql);
        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<MySqlAsyncRow> = conn.query(sql).await?;
        Ok(rows)
    }
}

#[async_trait]
impl SchemaSource for MySqlSchema {
    async fn list_tables(&self, database: &str, include_views: bool) -> Result<Vec<String>> {
        let sql = format!("SHOW FULL TABLES FROM {}", quote_identifier(database));
        let rows = self
            .query_rows(sql)
            .await
            .map_err(|e| e.on_connect(database))?;

        let mut tables = Vec::with_capacity(rows.len());
        for r in &rows {
            let (name, kind) = row::table_entry(r)?;
            if include_views || !kind.eq_ignore_ascii_case(VIEW_TABLE_TYPE) {
                tables.push(name);
            }
        }
        debug!("Found {} tables in `{}`", tables.len(), database);
        Ok(tables)
    }

    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<Column>> {
        let sql = format!(
            "SHOW COLUMNS FROM {} FROM {}",
            quote_identifier(table),
            quote_identifier(database)
        );
        let rows = self.query_rows(sql).await.map_err(|e| e.on_table(table))?;
        rows.iter().map(row::column).collect()
    }
}

/// Quote a MySQL identifier with backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
