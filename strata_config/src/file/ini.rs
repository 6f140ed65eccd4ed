//! INI-style reader with typed scalar scanning.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! ; comment            # comment
//! [section]            ; accepted, ignored: the namespace stays flat
//! key = value          ; typed scalar
//! key = "quoted"       ; verbatim string
//! list[] = a           ; appends to a sequence
//! map[inner] = b       ; sets a nested mapping entry
//! ```
//!
//! Keys pass through [`camel_case_key`] before insertion.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::Fields;
use crate::normalize::camel_case_key;

/// Syntax error reported with the 1-based line it occurred on.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("line {line}: {message}")]
pub struct IniSyntaxError {
    /// Line number of the offending input.
    pub line: usize,
    /// What the scanner expected.
    pub message: String,
}

enum KeyTarget<'a> {
    Scalar,
    Append,
    Entry(&'a str),
}

pub(super) fn parse(data: &str) -> Result<Fields, IniSyntaxError> {
    let mut fields = Fields::new();
    for (idx, raw) in data.lines().enumerate() {
        let line = idx + 1;
        let fail = |message: &str| IniSyntaxError {
            line,
            message: message.to_owned(),
        };
        let text = raw.trim();
        if text.is_empty() || text.starts_with(';') || text.starts_with('#') {
            continue;
        }
        if let Some(header) = text.strip_prefix('[') {
            check_section(header).map_err(fail)?;
            continue;
        }
        let (raw_key, raw_value) = text.split_once('=').ok_or_else(|| fail("expected '='"))?;
        let (name, target) = split_key(raw_key.trim()).map_err(fail)?;
        let value = scan_value(raw_value).map_err(fail)?;
        insert(&mut fields, camel_case_key(name), target, value);
    }
    Ok(fields)
}

fn check_section(header: &str) -> Result<(), &'static str> {
    let (name, rest) = header
        .split_once(']')
        .ok_or("unterminated section header")?;
    if name.trim().is_empty() {
        return Err("empty section name");
    }
    let trailing = rest.trim_start();
    if trailing.is_empty() || trailing.starts_with(';') || trailing.starts_with('#') {
        Ok(())
    } else {
        Err("unexpected text after section header")
    }
}

fn split_key(key: &str) -> Result<(&str, KeyTarget<'_>), &'static str> {
    let (name, target) = match key.strip_suffix(']').and_then(|k| k.split_once('[')) {
        Some((name, "")) => (name.trim_end(), KeyTarget::Append),
        Some((name, inner)) => (name.trim_end(), KeyTarget::Entry(inner.trim())),
        None => (key, KeyTarget::Scalar),
    };
    if name.is_empty() {
        return Err("missing key before '='");
    }
    Ok((name, target))
}

fn insert(fields: &mut Fields, name: String, target: KeyTarget<'_>, value: Value) {
    match target {
        KeyTarget::Scalar => {
            fields.insert(name, value);
        }
        KeyTarget::Append => {
            let slot = fields
                .entry(name)
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = slot {
                items.push(value);
            } else {
                *slot = Value::Array(vec![value]);
            }
        }
        KeyTarget::Entry(inner) => {
            let slot = fields
                .entry(name)
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(map) = slot {
                map.insert(inner.to_owned(), value);
            } else {
                let mut map = Map::new();
                map.insert(inner.to_owned(), value);
                *slot = Value::Object(map);
            }
        }
    }
}

fn scan_value(raw: &str) -> Result<Value, &'static str> {
    let text = raw.trim();
    if let Some(body) = text.strip_prefix('"') {
        return quoted(body, '"');
    }
    if let Some(body) = text.strip_prefix('\'') {
        return quoted(body, '\'');
    }
    let bare = text.split_once(';').map_or(text, |(before, _)| before);
    Ok(typed_scalar(bare.trim_end()))
}

fn quoted(body: &str, quote: char) -> Result<Value, &'static str> {
    let (content, rest) = body
        .split_once(quote)
        .ok_or("unterminated quoted value")?;
    let trailing = rest.trim_start();
    if trailing.is_empty() || trailing.starts_with(';') {
        Ok(Value::String(content.to_owned()))
    } else {
        Err("unexpected text after quoted value")
    }
}

fn typed_scalar(text: &str) -> Value {
    match text.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => return Value::Bool(true),
        "false" | "off" | "no" | "none" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }
    if is_integer_literal(text)
        && let Ok(int) = text.parse::<i64>()
    {
        return Value::Number(int.into());
    }
    if is_float_literal(text)
        && let Some(float) = text.parse::<f64>().ok().and_then(Number::from_f64)
    {
        return Value::Number(float);
    }
    Value::String(text.to_owned())
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_literal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}
