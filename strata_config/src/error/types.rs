//! Primary error enum for configuration loading flows.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while populating a [`crate::Config`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file extension matches none of the recognised format groups.
    #[error("File '{path}' type not supported")]
    UnsupportedFormat {
        /// Path whose extension was rejected.
        path: Utf8PathBuf,
    },

    /// The configuration file does not exist.
    #[error("File '{path}' not exists")]
    FileNotFound {
        /// Path that was looked up.
        path: Utf8PathBuf,
    },

    /// The file exists but its content cannot be turned into a mapping.
    #[error("Bad configuration in '{path}': {source}")]
    InvalidContent {
        /// Path of the offending file.
        path: Utf8PathBuf,
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading an existing configuration file failed.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the I/O failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record or defaults value did not serialise to a mapping.
    #[error("Record cannot be used as configuration: {message}")]
    InvalidRecord {
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Typed extraction of fields failed.
    #[error("Failed to extract configuration: {source}")]
    Extract {
        /// Underlying deserialisation error.
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`ConfigError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// See [`ConfigError::UnsupportedFormat`].
    UnsupportedFormat,
    /// See [`ConfigError::FileNotFound`].
    FileNotFound,
    /// See [`ConfigError::InvalidContent`].
    InvalidContent,
    /// See [`ConfigError::File`].
    File,
    /// See [`ConfigError::InvalidRecord`].
    InvalidRecord,
    /// See [`ConfigError::Extract`].
    Extract,
}

impl ConfigError {
    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::InvalidContent { .. } => ErrorKind::InvalidContent,
            Self::File { .. } => ErrorKind::File,
            Self::InvalidRecord { .. } => ErrorKind::InvalidRecord,
            Self::Extract { .. } => ErrorKind::Extract,
        }
    }
}
