//! Loosely typed field maps.
//!
//! Records and node-local data arrive from a query response with
//! application-defined shapes, so both are kept as `BTreeMap<String, Value>`.

use std::collections::BTreeMap;

use serde_json::Value;

/// Ordered map of field name to JSON value.
pub type FieldMap = BTreeMap<String, Value>;

/// Render a scalar field value as display text.
///
/// Strings are returned as is; numbers and booleans use their JSON text.
/// `null`, arrays and objects have no text form.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
