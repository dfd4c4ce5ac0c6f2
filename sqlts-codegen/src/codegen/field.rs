//! MySQL column type to TypeScript property mapping

use super::naming::{convert_case, Case};

/// SQL type substrings rendered as `number`
const NUMBER_TYPES: [&str; 4] = ["int", "float", "decimal", "numeric"];

/// SQL type substrings rendered as `string` (or `Date`, see [`DateMapping`])
const STRING_TYPES: [&str; 6] = ["date", "time", "char", "text", "blob", "enum"];

/// A TypeScript property type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsType {
    Number,
    String,
    Date,
}

impl TsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TsType::Number => "number",
            TsType::String => "string",
            TsType::Date => "Date",
        }
    }

    /// Result of JavaScript `typeof` for a value of this type
    pub fn type_of(&self) -> &'static str {
        match self {
            TsType::Number => "number",
            TsType::String => "string",
            TsType::Date => "object",
        }
    }
}

/// Which temporal columns are typed as `Date` instead of `string`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateMapping {
    /// `datetime` and `timestamp` columns
    pub date_time_as_date: bool,
    /// `date` columns
    pub date_as_date: bool,
}

/// Resolve the TypeScript type for a (lower-cased) SQL type.
///
/// Matching is by substring, numeric families first, so `point` resolves to
/// `number` and `json` or `geometry` resolve to nothing.
pub fn resolve_ts_type(sql_type: &str, dates: DateMapping) -> Option<TsType> {
    if NUMBER_TYPES.iter().any(|t| sql_type.contains(t)) {
        return Some(TsType::Number);
    }
    if STRING_TYPES.iter().any(|t| sql_type.contains(t)) {
        if dates.date_time_as_date
            && (sql_type.starts_with("datetime") || sql_type.starts_with("timestamp"))
        {
            return Some(TsType::Date);
        }
        if dates.date_as_date && sql_type == "date" {
            return Some(TsType::Date);
        }
        return Some(TsType::String);
    }
    None
}

/// Render a property declaration such as `createdAt?: string;`.
///
/// Returns `None` for SQL types with no TypeScript mapping; the caller skips
/// the column.
pub fn render_field(
    name: &str,
    sql_type: &str,
    null_optional: bool,
    rename: bool,
    case: Case,
) -> Option<String> {
    render_field_with(
        name,
        sql_type,
        null_optional,
        rename,
        case,
        DateMapping::default(),
    )
}

/// [`render_field`] with `Date` typing for temporal columns.
pub fn render_field_with(
    name: &str,
    sql_type: &str,
    null_optional: bool,
    rename: bool,
    case: Case,
    dates: DateMapping,
) -> Option<String> {
    let ts_type = resolve_ts_type(sql_type, dates)?;
    let name = property_name(name, rename, case);
    let marker = if null_optional { "?:" } else { ":" };
    Some(format!("{}{} {};", name, marker, ts_type.as_str()))
}

/// Property name for a column, converted to `case` when `rename` is set.
pub fn property_name(name: &str, rename: bool, case: Case) -> String {
    if rename {
        convert_case(case, name)
    } else {
        name.to_string()
    }
}
