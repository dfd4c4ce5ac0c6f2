//! SchemaSource trait for schema introspection backends

use crate::column::Column;
use crate::error::Result;
use async_trait::async_trait;

/// Trait for anything that can describe a database schema.
///
/// The generator only needs two questions answered: which tables exist in a
/// database, and what columns a table has. `MySqlSchema` answers them against
/// a live server; tests answer them from memory.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// List table names in `database`, in server order.
    ///
    /// Views are only returned when `include_views` is set.
    async fn list_tables(&self, database: &str, include_views: bool) -> Result<Vec<String>>;

    /// Fetch column metadata for `database`.`table`.
    ///
    /// Returns `Error::TableNotFound` when the table is missing or the user
    /// may not read it.
    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<Column>>;
}

#[async_trait]
impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    async fn list_tables(&self, database: &str, include_views: bool) -> Result<Vec<String>> {
        (**self).list_tables(database, include_views).await
    }

    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<Column>> {
        (**self).fetch_columns(database, table).await
    }
}
