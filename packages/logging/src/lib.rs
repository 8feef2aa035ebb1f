//! Logger initialisation shared by `AccountBox` binaries.
//!
//! Libraries only log through the [`log`] facade; binaries call [`init`]
//! once at startup.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "macros")]
mod macros;

pub use log;
use thiserror::Error;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "ACCOUNTBOX_LOG";

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: &str = "accountbox=trace";
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: &str = "accountbox=info";

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Resolves the filter directives used by [`init`].
///
/// `filter` wins, then [`LOG_ENV`], then `RUST_LOG`, then the build-profile
/// default.
#[must_use]
pub fn resolve_filter(filter: Option<&str>) -> String {
    resolve_filter_with(filter, |name| std::env::var(name).ok())
}

fn resolve_filter_with(filter: Option<&str>, var: impl Fn(&str) -> Option<String>) -> String {
    filter.map_or_else(
        || {
            var(LOG_ENV)
                .or_else(|| var("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
        },
        ToString::to_string,
    )
}

/// Installs the global logger.
///
/// # Errors
///
/// * If a global logger has already been installed
pub fn init(filter: Option<&str>) -> Result<(), InitError> {
    let filter = resolve_filter(filter);

    env_logger::Builder::new().parse_filters(&filter).try_init()?;

    log::debug!("Logging initialized with filter {filter:?}");

    Ok(())
}
