//! Native reader: TOML documents whose top-level table becomes the mapping.

use serde_json::{Number, Value};

use crate::Fields;

pub(super) fn parse(data: &str) -> Result<Fields, Box<dyn std::error::Error + Send + Sync>> {
    let table = toml::from_str::<toml::Table>(data)?;
    Ok(table_fields(table))
}

fn table_fields(table: toml::Table) -> Fields {
    table
        .into_iter()
        .map(|(name, value)| (name, json_value(value)))
        .collect()
}

/// Datetimes keep their TOML text; non-finite floats become `"nan"`/`"inf"`.
fn json_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(int) => Value::Number(int.into()),
        toml::Value::Float(float) => {
            Number::from_f64(float).map_or_else(|| Value::String(float.to_string()), Value::Number)
        }
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(json_value).collect()),
        toml::Value::Table(table) => Value::Object(table_fields(table)),
    }
}
