//! Prefix-filtered views of a configuration.

use super::Config;
use crate::Fields;
use crate::normalize::strip_prefix_key;

impl Config {
    /// Build a new container from the fields whose name starts with
    /// `prefix`, renamed by stripping the prefix and lower-casing the next
    /// letter.
    ///
    /// The slice is independent of `self` and carries no defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.set("dbHost", "localhost");
    /// config.set("dbPort", 5432);
    /// config.set("debug", true);
    ///
    /// let db = config.get_slice("db");
    /// assert_eq!(db.names().collect::<Vec<_>>(), ["host", "port"]);
    /// ```
    #[must_use]
    pub fn get_slice(&self, prefix: &str) -> Self {
        let slice: Fields = self
            .fields
            .iter()
            .filter_map(|(name, value)| {
                strip_prefix_key(name, prefix).map(|renamed| (renamed, value.clone()))
            })
            .collect();
        tracing::trace!(prefix, fields = slice.len(), "sliced configuration");
        Self::new(slice)
    }
}
