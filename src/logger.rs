//! Logging initialisation via tracing-subscriber.
//!
//! Traversal misses are reported at `trace` level under the `keydig` target,
//! so `KEYDIG_LOG_LEVEL=trace` shows which step of a keypath failed and why.
//! `RUST_LOG`, when set and valid, replaces the configured filter entirely.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber on stderr.
///
/// Call once at startup, after config is resolved. Stdout is reserved for
/// the dig result.
pub fn init(level: &str) -> Result<(), AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_for(level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Build the filter: a valid `rust_log` wins, otherwise `level` applies to
/// this crate only and dependencies stay at `warn`.
pub fn filter_for(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, AppError> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }

    let level = parse_level(level)?;
    EnvFilter::try_new(format!("warn,keydig={level}"))
        .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))
}

/// Parse a log level string into a [`LevelFilter`], returning an error on
/// unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
