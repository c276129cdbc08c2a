//! Permissive field lookups over a decoded document.

use serde_json::{Map, Value};

use crate::schema::{FieldPattern, Rule, WaveId};

use super::error::EntryError;

/// Build a [`Rule`] from one `notifications.custom` entry.
///
/// `null` fields count as absent. A missing or empty `name` becomes
/// `rule_<index>`; a missing or empty `wave` inherits `default_wave`.
pub(super) fn build_rule(index: usize, item: &Value, default_wave: &WaveId) -> Result<Rule, EntryError> {
    let entry = item
        .as_object()
        .ok_or_else(|| EntryError::NotAMapping(value_kind(item)))?;

    let name = optional_str(entry, "name")?
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("rule_{index}"));
    let app = optional_str(entry, "pattern_app")?;
    let summary = optional_str(entry, "pattern_summary")?;
    let body = optional_str(entry, "pattern_body")?;
    let wave = optional_str(entry, "wave")?
        .filter(|s| !s.is_empty())
        .map(WaveId::from)
        .unwrap_or_else(|| default_wave.clone());

    Ok(Rule::from_parts(
        name,
        FieldPattern::parse(app),
        FieldPattern::parse(summary),
        FieldPattern::parse(body),
        wave,
    ))
}

/// Look up a string field; `null` and absent are both `None`.
pub(super) fn optional_str<'a>(
    entry: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, EntryError> {
    match entry.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(EntryError::FieldType {
            field,
            found: value_kind(other),
        }),
    }
}

/// Boolean coercion: `null`, `false`, zero and empty values are false.
pub(super) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Document-level name of a value's type, for diagnostics.
pub(super) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
