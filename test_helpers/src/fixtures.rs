//! Writers for configuration fixtures in a temporary directory.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tempfile::TempDir;

/// Temporary directory holding configuration fixtures.
///
/// The directory and everything written into it is removed on drop.
pub struct FixtureDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FixtureDir {
    /// Create an empty fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create fixture directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|p| anyhow::anyhow!("fixture path is not UTF-8: {}", p.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Directory the fixtures live in.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path a fixture called `name` would have, whether or not it exists.
    #[must_use]
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` verbatim to `name` and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents).with_context(|| format!("write fixture {path}"))?;
        Ok(path)
    }

    /// Serialise `fields` as a JSON object into `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, name: &str, fields: &Map<String, Value>) -> Result<Utf8PathBuf> {
        let text = serde_json::to_string_pretty(fields).context("serialise JSON fixture")?;
        self.write(name, &text)
    }

    /// Write `fields` as flat `key = value` lines into `name`.
    ///
    /// Keys are written as given; only scalar values are supported.
    ///
    /// # Errors
    ///
    /// Returns an error for non-scalar values or when the write fails.
    pub fn write_ini(&self, name: &str, fields: &Map<String, Value>) -> Result<Utf8PathBuf> {
        let mut text = String::new();
        for (key, value) in fields {
            let rendered = match value {
                Value::Null => "null".to_owned(),
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                Value::String(s) => format!("\"{s}\""),
                Value::Array(_) | Value::Object(_) => {
                    bail!("INI fixtures only hold scalars, '{key}' is {value}")
                }
            };
            writeln!(text, "{key} = {rendered}").context("render INI fixture")?;
        }
        self.write(name, &text)
    }
}
