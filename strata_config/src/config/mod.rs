//! The configuration container and its load entrypoints.

mod slice;

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::file::{self, ConfigFormat};
use crate::merge::{MergeReport, Overwrite, merge_fields};
use crate::{ConfigError, ConfigResult, Fields};

/// A configuration object populated incrementally from mappings, records and
/// files.
///
/// Every source is reduced to a canonical mapping of field name to value and
/// merged into the container's field set under an [`Overwrite`] policy. The
/// `overwrite` arguments accept either an [`Overwrite`] or a plain `bool`.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use strata_config::{Config, Fields};
///
/// #[derive(Default, Deserialize, Serialize)]
/// struct AppSettings {
///     debug: bool,
///     workers: u32,
/// }
///
/// let mut config = Config::from_defaults::<AppSettings>(Fields::new())?;
/// config.load_from_record(&serde_json::json!({"debug": true, "workers": 4}), false)?;
/// // `debug` and `workers` already existed, so nothing changed.
/// assert_eq!(config.get_as::<u32>("workers")?, Some(0));
///
/// config.load_from_record(&serde_json::json!({"workers": 4}), true)?;
/// let settings: AppSettings = config.extract()?;
/// assert_eq!(settings.workers, 4);
/// # Ok::<_, strata_config::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    fields: Fields,
}

impl Config {
    /// Create a container holding exactly `initial`.
    #[must_use]
    pub fn new(initial: Fields) -> Self {
        Self::with_defaults(Fields::new(), initial)
    }

    /// Create a container seeded with declared `defaults`, then overlay
    /// `initial`. Supplied values always win over defaults.
    #[must_use]
    pub fn with_defaults(defaults: Fields, initial: Fields) -> Self {
        let mut config = Self { fields: defaults };
        config.load_from_mapping(initial, Overwrite::Replace);
        config
    }

    /// Create a container whose declared fields are the serialised
    /// `T::default()`, then overlay `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRecord`] when `T` does not serialise to a
    /// mapping.
    pub fn from_defaults<T>(initial: Fields) -> ConfigResult<Self>
    where
        T: Default + Serialize,
    {
        let defaults = record_fields(&T::default())?;
        Ok(Self::with_defaults(defaults, initial))
    }

    /// Merge `mapping` into the field set.
    pub fn load_from_mapping(
        &mut self,
        mapping: Fields,
        overwrite: impl Into<Overwrite>,
    ) -> MergeReport {
        let report = merge_fields(&mut self.fields, mapping, overwrite.into());
        tracing::trace!(?report, "merged configuration mapping");
        report
    }

    /// Merge the public fields of any serialisable record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRecord`] when `record` does not
    /// serialise to a mapping.
    pub fn load_from_record<T>(
        &mut self,
        record: &T,
        overwrite: impl Into<Overwrite>,
    ) -> ConfigResult<MergeReport>
    where
        T: Serialize + ?Sized,
    {
        let mapping = record_fields(record)?;
        Ok(self.load_from_mapping(mapping, overwrite))
    }

    /// Load a file, choosing the reader from the extension after the last
    /// `.` of the file name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for unrecognised extensions
    /// without touching the filesystem, and otherwise any error of the
    /// format-specific loader.
    pub fn load_from_file(
        &mut self,
        path: impl AsRef<Path>,
        overwrite: impl Into<Overwrite>,
    ) -> ConfigResult<MergeReport> {
        let file = path.as_ref();
        let format =
            ConfigFormat::from_path(file).ok_or_else(|| ConfigError::unsupported_format(file))?;
        self.load_format(file, format, overwrite.into())
    }

    /// Load a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`], [`ConfigError::File`] or
    /// [`ConfigError::InvalidContent`].
    pub fn load_from_native(
        &mut self,
        path: impl AsRef<Path>,
        overwrite: impl Into<Overwrite>,
    ) -> ConfigResult<MergeReport> {
        self.load_format(path.as_ref(), ConfigFormat::Native, overwrite.into())
    }

    /// Load an INI-style file. Keys are normalised to camel case.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`], [`ConfigError::File`] or
    /// [`ConfigError::InvalidContent`].
    pub fn load_from_ini(
        &mut self,
        path: impl AsRef<Path>,
        overwrite: impl Into<Overwrite>,
    ) -> ConfigResult<MergeReport> {
        self.load_format(path.as_ref(), ConfigFormat::Ini, overwrite.into())
    }

    /// Load a JSON file holding a single object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`], [`ConfigError::File`] or
    /// [`ConfigError::InvalidContent`].
    pub fn load_from_json(
        &mut self,
        path: impl AsRef<Path>,
        overwrite: impl Into<Overwrite>,
    ) -> ConfigResult<MergeReport> {
        self.load_format(path.as_ref(), ConfigFormat::Json, overwrite.into())
    }

    fn load_format(
        &mut self,
        path: &Path,
        format: ConfigFormat,
        overwrite: Overwrite,
    ) -> ConfigResult<MergeReport> {
        tracing::debug!(path = %path.display(), %format, ?overwrite, "loading configuration file");
        let mapping = file::read_fields(path, format)?;
        let report = self.load_from_mapping(mapping, overwrite);
        tracing::debug!(
            path = %path.display(),
            inserted = report.inserted,
            replaced = report.replaced,
            skipped = report.skipped,
            "loaded configuration file"
        );
        Ok(report)
    }

    /// Number of fields currently set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    /// Alias of [`Config::count`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the value of field `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Deserialise field `name` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Extract`] when the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> ConfigResult<Option<T>> {
        self.fields
            .get(name)
            .map(T::deserialize)
            .transpose()
            .map_err(ConfigError::from)
    }

    /// Returns `true` when field `name` is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set field `name`, replacing any existing value. Returns the previous
    /// value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove field `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Borrow the underlying field set.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consume the container, returning its field set.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Deserialise the whole field set into a host type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Extract`] when the fields do not fit `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        Ok(serde_json::from_value(Value::Object(self.fields.clone()))?)
    }
}

impl From<Fields> for Config {
    fn from(initial: Fields) -> Self {
        Self::new(initial)
    }
}

fn record_fields<T: Serialize + ?Sized>(record: &T) -> ConfigResult<Fields> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ConfigError::invalid_record(format!(
            "expected a mapping, found `{other}`"
        ))),
        Err(err) => Err(ConfigError::invalid_record(err.to_string())),
    }
}

#[cfg(test)]
mod tests;
