//! Extension routing for configuration files.

use std::fmt;
use std::path::Path;

/// Recognised configuration file formats.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConfigFormat {
    /// Structured TOML documents.
    Native,
    /// Flat `key = value` files.
    Ini,
    /// Single-object JSON documents.
    Json,
}

const NATIVE_EXTENSIONS: &[&str] = &["toml"];
const INI_EXTENSIONS: &[&str] = &["ini", "cfg", "config", "env"];
const JSON_EXTENSIONS: &[&str] = &["json", "jsn", "js"];

impl ConfigFormat {
    /// Every format, in routing order.
    pub const ALL: [Self; 3] = [Self::Native, Self::Ini, Self::Json];

    /// File extensions routed to this format.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Native => NATIVE_EXTENSIONS,
            Self::Ini => INI_EXTENSIONS,
            Self::Json => JSON_EXTENSIONS,
        }
    }

    /// Look up the format for an extension. Matching is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_config::ConfigFormat;
    /// assert_eq!(ConfigFormat::from_extension("cfg"), Some(ConfigFormat::Ini));
    /// assert_eq!(ConfigFormat::from_extension("JSON"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext))
    }

    /// Look up the format for the text after the last `.` of the file name.
    ///
    /// Dot files count: `.env` has the extension `env`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use strata_config::ConfigFormat;
    /// assert_eq!(ConfigFormat::from_path(Path::new("conf/app.json")), Some(ConfigFormat::Json));
    /// assert_eq!(ConfigFormat::from_path(Path::new(".env")), Some(ConfigFormat::Ini));
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.none")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        extension_of(path).and_then(Self::from_extension)
    }

    /// Short lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "toml",
            Self::Ini => "ini",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rsplit_once('.').map(|(_, ext)| ext)
}
