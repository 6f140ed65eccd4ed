//! JSON reader: one top-level object, members taken verbatim.

use serde_json::Value;

use crate::Fields;

pub(super) fn parse(data: &str) -> Result<Fields, Box<dyn std::error::Error + Send + Sync>> {
    match serde_json::from_str::<Value>(data)? {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected a JSON object, found {}", kind_of(&other)).into()),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
