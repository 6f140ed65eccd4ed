//! Test helpers shared across the workspace.
//!
//! [`figment`] wraps `figment::Jail` for tests that need an isolated working
//! directory; [`fixtures`] writes configuration files in each supported
//! format.

pub mod figment;
pub mod fixtures;
