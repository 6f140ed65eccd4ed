//! Format readers turning configuration files into canonical mappings.

mod format;
mod ini;
mod json;
mod native;

pub use format::ConfigFormat;
pub use ini::IniSyntaxError;

use std::io;
use std::path::Path;

use crate::{ConfigError, ConfigResult, Fields};

/// Read `path` as `format` and return its canonical mapping.
///
/// Nothing is merged here; callers receive a fully materialised mapping or
/// an error.
///
/// # Errors
///
/// Returns [`ConfigError::FileNotFound`] when `path` does not exist,
/// [`ConfigError::File`] when it cannot be read and
/// [`ConfigError::InvalidContent`] when the content does not parse to a
/// mapping.
pub fn read_fields(path: &Path, format: ConfigFormat) -> ConfigResult<Fields> {
    if !path.exists() {
        return Err(ConfigError::file_not_found(path));
    }
    let data = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => ConfigError::invalid_content(path, err),
        _ => ConfigError::file(path, err),
    })?;
    parse_fields(&data, format).map_err(|err| ConfigError::invalid_content(path, err))
}

/// Parse in-memory configuration text as `format`.
///
/// # Errors
///
/// Returns the parser's error when `data` is malformed or does not describe
/// a mapping.
pub fn parse_fields(
    data: &str,
    format: ConfigFormat,
) -> Result<Fields, Box<dyn std::error::Error + Send + Sync>> {
    match format {
        ConfigFormat::Native => native::parse(data),
        ConfigFormat::Ini => Ok(ini::parse(data)?),
        ConfigFormat::Json => json::parse(data),
    }
}
