//! Declaration renderer - turns a table descriptor into TypeScript source

use regex::RegexSet;
use sqlts::mysql::quote_identifier;
use sqlts::Column;

use crate::config::{Config, OutputKind, TableDescriptor};
use crate::error::{CodegenError, Result};

use super::field::{property_name, render_field_with, resolve_ts_type, TsType};
use super::naming::convert_case_up;

/// Name of the exported declaration for a table, e.g. `OrderItemsModel`.
pub fn declaration_name(table: &TableDescriptor, config: &Config) -> String {
    let base = if config.rename_table_to_case {
        convert_case_up(config.case, &table.name)
    } else {
        table.name.clone()
    };
    let name = format!("{}{}", base, convert_case_up(config.case, &table.suffix));
    capitalize(&name)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the full declaration for a table whose columns have been fetched.
///
/// Columns matching any omit pattern, and columns whose SQL type has no
/// TypeScript mapping, are left out.
pub fn render_table(table: &TableDescriptor, config: &Config) -> Result<String> {
    let omit = RegexSet::new(&table.omit).map_err(|e| {
        CodegenError::ValidationError(format!(
            "Invalid omit pattern for table {}: {}",
            table.name, e
        ))
    })?;
    let indent = " ".repeat(config.tab_size);
    let name = declaration_name(table, config);

    let mut code = String::new();
    match table.kind {
        OutputKind::Interface => code.push_str(&format!("export interface {} {{\n", name)),
        OutputKind::Type => code.push_str(&format!("export type {} = {{\n", name)),
        OutputKind::Class => code.push_str(&format!("export class {} {{\n", name)),
    }

    let mut rendered: Vec<&Column> = Vec::new();
    let mut properties: Vec<(String, TsType)> = Vec::new();
    for column in &table.columns {
        if omit.is_match(&column.field) {
            continue;
        }
        let Some(ts_type) = resolve_ts_type(&column.sql_type, config.date_mapping()) else {
            continue;
        };
        let line = render_field_with(
            &column.field,
            &column.sql_type,
            config.set_null_as_optional && column.nullable,
            config.rename_attribute_to_case,
            config.case,
            config.date_mapping(),
        );
        if let Some(line) = line {
            code.push_str(&indent);
            code.push_str(&line);
            code.push('\n');
        }
        rendered.push(column);
        properties.push((
            property_name(&column.field, config.rename_attribute_to_case, config.case),
            ts_type,
        ));
    }

    if table.generates_crud() {
        code.push('\n');
        code.push_str(&generate_crud(table, &rendered, &indent));
    }

    if table.generates_constructor() {
        code.push('\n');
        code.push_str(&generate_constructor(&name, &properties, &indent));
    }

    match table.kind {
        OutputKind::Type => code.push_str("};\n"),
        _ => code.push_str("}\n"),
    }
    Ok(code)
}

/// Constructor copying each own key of the input whose value has the
/// property's runtime type
fn generate_constructor(name: &str, properties: &[(String, TsType)], indent: &str) -> String {
    let i2 = indent.repeat(2);
    let i3 = indent.repeat(3);
    let i4 = indent.repeat(4);
    let i5 = indent.repeat(5);
    let types = if properties.is_empty() {
        "{}".to_string()
    } else {
        let entries = properties
            .iter()
            .map(|(prop, ts_type)| format!("{}: {}", ts_string(prop), ts_string(ts_type.type_of())))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", entries)
    };
    format!(
        r#"{indent}constructor(input?: Partial<{name}>) {{
{i2}if (input) {{
{i3}const types: Record<string, string> = {types};
{i3}for (const key of Object.keys(input)) {{
{i4}// @ts-ignore
{i4}if (typeof input[key] === types[key]) {{
{i5}// @ts-ignore
{i5}this[key] = input[key];
{i4}}}
{i3}}}
{i2}}}
{indent}}}
"#
    )
}

/// Static SQL statements over the rendered columns
fn generate_crud(table: &TableDescriptor, columns: &[&Column], indent: &str) -> String {
    let table_name = quote_identifier(&table.name);
    let select_columns = join_columns(columns.iter().copied());
    let select_all = format!("SELECT {} FROM {}", select_columns, table_name);

    let insertable: Vec<&Column> = columns
        .iter()
        .copied()
        .filter(|c| !c.is_auto_increment())
        .collect();
    let placeholders = vec!["?"; insertable.len()].join(", ");
    let insert = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table_name,
        join_columns(insertable.iter().copied()),
        placeholders
    );

    let mut statements = vec![
        ("TABLE", table_name.clone()),
        ("SELECT_ALL", select_all.clone()),
        ("INSERT", insert),
    ];

    let primary_key: Vec<&Column> = table.columns.iter().filter(|c| c.is_primary_key()).collect();
    if !primary_key.is_empty() {
        let where_clause = build_where_clause(&primary_key);
        statements.push((
            "SELECT_BY_PK",
            format!("{} WHERE {}", select_all, where_clause),
        ));

        let updatable: Vec<&Column> = columns
            .iter()
            .copied()
            .filter(|c| !c.is_primary_key())
            .collect();
        if !updatable.is_empty() {
            let set_clause = updatable
                .iter()
                .map(|c| format!("{} = ?", quote_identifier(&c.field)))
                .collect::<Vec<_>>()
                .join(", ");
            statements.push((
                "UPDATE_BY_PK",
                format!("UPDATE {} SET {} WHERE {}", table_name, set_clause, where_clause),
            ));
        }

        statements.push((
            "DELETE_BY_PK",
            format!("DELETE FROM {} WHERE {}", table_name, where_clause),
        ));
    }

    statements
        .into_iter()
        .map(|(name, sql)| format!("{}static readonly {} = {};\n", indent, name, ts_string(&sql)))
        .collect()
}

fn join_columns<'a>(columns: impl Iterator<Item = &'a Column>) -> String {
    columns
        .map(|c| quote_identifier(&c.field))
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_where_clause(columns: &[&Column]) -> String {
    columns
        .iter()
        .map(|c| format!("{} = ?", quote_identifier(&c.field)))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Single-quoted TypeScript string literal
fn ts_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
