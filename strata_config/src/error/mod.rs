//! Error types produced by the configuration container and its loaders.

mod constructors;
mod types;

pub use types::{ConfigError, ErrorKind};

/// Result alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests;
