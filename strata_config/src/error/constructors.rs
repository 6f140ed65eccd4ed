//! Constructors for `ConfigError` keyed by the path being loaded.

use std::path::Path;

use camino::Utf8PathBuf;

use super::ConfigError;

/// Convert a path to a UTF-8 path, falling back to lossy conversion.
fn to_utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

impl ConfigError {
    /// Construct a [`ConfigError::UnsupportedFormat`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_config::{ConfigError, ErrorKind};
    /// let e = ConfigError::unsupported_format("config.none");
    /// assert_eq!(e.kind(), ErrorKind::UnsupportedFormat);
    /// ```
    #[must_use]
    pub fn unsupported_format(path: impl AsRef<Path>) -> Self {
        Self::UnsupportedFormat {
            path: to_utf8_path(path.as_ref()),
        }
    }

    /// Construct a [`ConfigError::FileNotFound`] for `path`.
    #[must_use]
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: to_utf8_path(path.as_ref()),
        }
    }

    /// Construct a [`ConfigError::InvalidContent`] wrapping a parser error.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_config::{ConfigError, ErrorKind};
    /// let e = ConfigError::invalid_content("config.json", "top-level value is not an object");
    /// assert_eq!(e.kind(), ErrorKind::InvalidContent);
    /// assert!(e.to_string().contains("not an object"));
    /// ```
    #[must_use]
    pub fn invalid_content(
        path: impl AsRef<Path>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::InvalidContent {
            path: to_utf8_path(path.as_ref()),
            source: source.into(),
        }
    }

    /// Construct a [`ConfigError::File`] from an I/O failure.
    #[must_use]
    pub fn file(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::File {
            path: to_utf8_path(path.as_ref()),
            source,
        }
    }

    /// Construct a [`ConfigError::InvalidRecord`].
    #[must_use]
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::Extract { source }
    }
}
