//! Shallow merging of canonical mappings into a field set.

use crate::Fields;

/// Policy applied when a source entry names a field that already exists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Overwrite {
    /// Fill gaps only; existing fields keep their value.
    #[default]
    Keep,
    /// Replace existing fields with the source value.
    Replace,
}

impl From<bool> for Overwrite {
    fn from(overwrite: bool) -> Self {
        if overwrite { Self::Replace } else { Self::Keep }
    }
}

/// Tally of what a single merge did to the target.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeReport {
    /// Entries whose name was new to the target.
    pub inserted: usize,
    /// Existing fields overwritten under [`Overwrite::Replace`].
    pub replaced: usize,
    /// Existing fields preserved under [`Overwrite::Keep`].
    pub skipped: usize,
}

impl MergeReport {
    /// Number of source entries that changed the target.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.inserted + self.replaced
    }
}

/// Apply `source` onto `target` entry by entry, in `source` iteration order.
///
/// Values are never deep-merged: a nested mapping in `source` replaces the
/// target's value wholesale when it is applied.
///
/// # Examples
///
/// ```rust
/// use strata_config::{Fields, Overwrite, merge::merge_fields};
/// use serde_json::json;
///
/// let mut target = Fields::new();
/// target.insert("debug".into(), json!(false));
///
/// let mut source = Fields::new();
/// source.insert("debug".into(), json!(true));
/// source.insert("port".into(), json!(8080));
///
/// let report = merge_fields(&mut target, source, Overwrite::Keep);
/// assert_eq!(target["debug"], json!(false));
/// assert_eq!(target["port"], json!(8080));
/// assert_eq!((report.inserted, report.skipped), (1, 1));
/// ```
pub fn merge_fields(target: &mut Fields, source: Fields, overwrite: Overwrite) -> MergeReport {
    let mut report = MergeReport::default();
    for (name, value) in source {
        match target.get_mut(&name) {
            Some(_) if overwrite == Overwrite::Keep => {
                tracing::trace!(field = %name, "keeping existing configuration field");
                report.skipped += 1;
            }
            Some(existing) => {
                *existing = value;
                report.replaced += 1;
            }
            None => {
                target.insert(name, value);
                report.inserted += 1;
            }
        }
    }
    report
}
