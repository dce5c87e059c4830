//! Tracing setup.
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one was requested with `--log-file`. The filter comes from `FOLIO_LOG`
//! (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, FolioResult};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Filter used when `FOLIO_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Filter from `FOLIO_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build a subscriber appending plain-text lines to `path`.
pub fn file_subscriber(
    path: &Path,
    filter: EnvFilter,
) -> FolioResult<impl Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .finish())
}

/// Install the global subscriber.
///
/// Without a path nothing is installed and every event is dropped.
/// Returns whether a subscriber was installed.
pub fn init(path: Option<&Path>) -> FolioResult<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let subscriber = file_subscriber(path, env_filter())?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| FolioError::Logging(e.to_string()))?;
    Ok(true)
}
