//! Text access to `SHOW ...` result rows

use std::fmt::Debug;

use crate::column::Column;
use crate::error::{Error, Result};
use mysql_async::Row as MySqlAsyncRow;

/// Turn a `Row::get_opt` lookup into a nullable text value.
fn decode<E: Debug>(
    value: Option<std::result::Result<Option<String>, E>>,
    column: &str,
) -> Result<Option<String>> {
    match value {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(Error::RowDecode(format!("column `{}`: {:?}", column, e))),
        None => Err(Error::RowDecode(format!("column `{}` not found", column))),
    }
}

fn required(value: Option<String>, column: &str) -> Result<String> {
    value.ok_or_else(|| Error::RowDecode(format!("column `{}` is NULL", column)))
}

fn named(row: &MySqlAsyncRow, column: &str) -> Result<Option<String>> {
    decode(row.get_opt::<Option<String>, _>(column), column)
}

fn positional(row: &MySqlAsyncRow, index: usize) -> Result<Option<String>> {
    decode(
        row.get_opt::<Option<String>, _>(index),
        &format!("#{}", index),
    )
}

/// Decode one `SHOW FULL TABLES` row into `(name, table_type)`.
///
/// The first column is named after the database (`Tables_in_<db>`), so both
/// columns are read by position.
pub(crate) fn table_entry(row: &MySqlAsyncRow) -> Result<(String, String)> {
    let name = required(positional(row, 0)?, "#0")?;
    let kind = required(positional(row, 1)?, "#1")?;
    Ok((name, kind))
}

/// Decode one `SHOW COLUMNS` row.
pub(crate) fn column(row: &MySqlAsyncRow) -> Result<Column> {
    Ok(Column::from_show_columns(
        &required(named(row, "Field")?, "Field")?,
        &required(named(row, "Type")?, "Type")?,
        &required(named(row, "Null")?, "Null")?,
        named(row, "Key")?,
        named(row, "Default")?,
        named(row, "Extra")?,
    ))
}
