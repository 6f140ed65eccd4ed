//! Key normalisation rules shared by the INI reader and the slice extractor.
//!
//! Canonical field names are camel case: `dbConnectionPool`, `debug`,
//! `prefixOneValueTwo`. Only ASCII letters change case; other characters are
//! copied through untouched.

/// Lower-case the first character of `s` when it is an ASCII letter.
///
/// # Examples
///
/// ```
/// use strata_config::normalize::lcfirst;
/// assert_eq!(lcfirst("ValueOne"), "valueOne");
/// assert_eq!(lcfirst("Élan"), "Élan");
/// ```
#[must_use]
pub fn lcfirst(s: &str) -> String {
    map_first(s, char::to_ascii_lowercase)
}

fn ucfirst(s: &str) -> String {
    map_first(s, char::to_ascii_uppercase)
}

fn map_first(s: &str, f: impl FnOnce(&char) -> char) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(s.len());
        out.push(f(&first));
        out.push_str(chars.as_str());
        out
    })
}

/// Convert an INI-style key to its canonical camel-case field name.
///
/// The key is lower-cased wholesale, `.` is rewritten to `_`, and the result
/// is split on `_`. Every word after the first gets an upper-case initial,
/// the words are joined without separators and the first letter of the
/// result is lower-cased. Doubled or leading separators therefore vanish.
///
/// # Examples
///
/// ```
/// use strata_config::normalize::camel_case_key;
/// assert_eq!(camel_case_key("db.connection_pool"), "dbConnectionPool");
/// assert_eq!(camel_case_key("DEBUG"), "debug");
/// assert_eq!(camel_case_key("Log_Level"), "logLevel");
/// ```
#[must_use]
pub fn camel_case_key(key: &str) -> String {
    let lowered = key.to_ascii_lowercase().replace('.', "_");
    let mut words = lowered.split('_');
    let mut joined = words.next().unwrap_or_default().to_owned();
    for word in words {
        joined.push_str(&ucfirst(word));
    }
    lcfirst(&joined)
}

/// Rename a field for a slice taken with `prefix`.
///
/// Returns `None` when `name` does not start with `prefix` (byte-wise,
/// case-sensitive) or when nothing remains after stripping it.
///
/// # Examples
///
/// ```
/// use strata_config::normalize::strip_prefix_key;
/// assert_eq!(
///     strip_prefix_key("prefixOneValueTwo", "prefixOne").as_deref(),
///     Some("valueTwo"),
/// );
/// assert_eq!(strip_prefix_key("prefixTwoValueOne", "prefixOne"), None);
/// ```
#[must_use]
pub fn strip_prefix_key(name: &str, prefix: &str) -> Option<String> {
    name.strip_prefix(prefix)
        .filter(|rest| !rest.is_empty())
        .map(lcfirst)
}
