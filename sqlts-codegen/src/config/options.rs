//! Per-field resolution of raw configuration values
//!
//! Every helper takes the raw JSON object, the field name and the value to
//! fall back to. A field is only taken when it is present and of the expected
//! JSON type (and, for choices, on the allow-list); anything else keeps the
//! fallback without raising an error.

use serde_json::{Map, Value};

/// A raw JSON object as read from the configuration file
pub type Object = Map<String, Value>;

/// The field as a string, if present and a string.
pub fn given_string<'a>(raw: &'a Object, name: &str) -> Option<&'a str> {
    raw.get(name).and_then(Value::as_str)
}

/// The field as a non-empty string, if present.
pub fn given_non_empty<'a>(raw: &'a Object, name: &str) -> Option<&'a str> {
    given_string(raw, name).filter(|s| !s.is_empty())
}

pub fn take_string(raw: &Object, name: &str, fallback: &str) -> String {
    given_string(raw, name).unwrap_or(fallback).to_string()
}

pub fn take_bool(raw: &Object, name: &str, fallback: bool) -> bool {
    raw.get(name).and_then(Value::as_bool).unwrap_or(fallback)
}

/// Non-negative integer field
pub fn take_usize(raw: &Object, name: &str, fallback: usize) -> usize {
    raw.get(name)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(fallback)
}

/// String field restricted to the values `parse` accepts.
pub fn take_choice<T>(raw: &Object, name: &str, parse: fn(&str) -> Option<T>, fallback: T) -> T {
    given_string(raw, name).and_then(parse).unwrap_or(fallback)
}

/// Array-of-strings field; an array holding anything else is ignored whole.
pub fn take_string_list(raw: &Object, name: &str, fallback: &[String]) -> Vec<String> {
    raw.get(name)
        .and_then(Value::as_array)
        .and_then(|items| {
            items
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_else(|| fallback.to_vec())
}

/// JSON type name used in validation messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
