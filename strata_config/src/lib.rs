//! Core crate for the `strata_config` configuration container.
//!
//! A [`Config`] holds a flat set of named fields. It is populated from
//! in-memory mappings, serialisable records, or files whose format is chosen
//! by extension:
//!
//! | Format | Extensions |
//! |---|---|
//! | TOML | `toml` |
//! | INI-style | `ini`, `cfg`, `config`, `env` |
//! | JSON | `json`, `jsn`, `js` |
//!
//! Each source becomes a canonical mapping which is merged into the field set
//! under an [`Overwrite`] policy. INI keys are normalised to camel case
//! (`db.connection_pool` becomes `dbConnectionPool`) so every format shares
//! the same naming convention. [`Config::get_slice`] derives a new container
//! from the fields sharing a prefix.
//!
//! ```rust,no_run
//! use strata_config::{Config, Fields};
//!
//! let mut config = Config::new(Fields::new());
//! config.set("debug", false);
//! config.load_from_file("config.ini", false)?;
//! config.load_from_file("local.json", true)?;
//! let database = config.get_slice("db");
//! # Ok::<_, strata_config::ConfigError>(())
//! ```

mod config;
mod error;
pub mod file;
pub mod merge;
pub mod normalize;

pub use config::Config;
pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use file::ConfigFormat;
pub use merge::{MergeReport, Overwrite};

/// Canonical mapping from field name to value, in insertion order.
pub type Fields = serde_json::Map<String, serde_json::Value>;
