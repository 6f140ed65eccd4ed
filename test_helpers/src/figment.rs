//! Helpers for running loaders inside a `figment::Jail`.
//!
//! A jail gives each test a scratch working directory, so fixture files can
//! be created with relative names and loaded back through the public API.

use anyhow::{Context, Result, anyhow};

/// Creates each `(name, contents)` fixture inside a fresh [`figment::Jail`],
/// then runs `f` with the jail as working directory and returns its output.
///
/// Pass an empty slice for a bare scratch directory. The jail and its files
/// are removed once `f` returns, whether or not it succeeded.
///
/// # Errors
///
/// Returns an error if the jail cannot be created, a fixture cannot be
/// written or `f` fails.
pub fn with_files<F, T>(files: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut captured = None;
    figment::Jail::try_with(|jail| {
        for (name, contents) in files {
            jail.create_file(name, contents)?;
        }
        captured = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("jailed fixture run failed: {err}"))?;
    captured.context("fixture closure produced no value")
}

/// Converts a loader error into a [`figment::Error`] so it can cross the
/// jail boundary with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adaptor which hands over ownership"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
