//! Configuration loading with env-var overrides.
//!
//! Reads `keydig.toml` relative to the current working directory when it
//! exists, then applies the `KEYDIG_LOG_LEVEL` env override. `KEYDIG_CONFIG`
//! names a different file; a file named that way must exist.

use std::{
    env, fs,
    path::Path,
};

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_PATH: &str = "keydig.toml";

/// Fully-resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    /// Pretty-print the JSON written to stdout.
    pub pretty: bool,
    /// Value reported on a miss when the command line gives none.
    pub default_value: Option<Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: false,
            default_value: None,
        }
    }
}

/// Raw TOML shape, deserialized before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    keydig: RawKeydig,
}

#[derive(Deserialize)]
struct RawKeydig {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    pretty: bool,
    /// Any TOML value; carried over as JSON.
    #[serde(rename = "default", default)]
    default_value: Option<Value>,
}

impl Default for RawKeydig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: false,
            default_value: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load config from `KEYDIG_CONFIG` or `keydig.toml`, then apply env overrides.
pub fn load() -> Result<Config, AppError> {
    let explicit = env::var("KEYDIG_CONFIG").ok();
    let log_level_override = env::var("KEYDIG_LOG_LEVEL").ok();
    load_with(explicit.as_deref().map(Path::new), log_level_override.as_deref())
}

/// Resolve which file to read. An explicit path must exist; the default
/// path is optional and falls back to built-in defaults.
pub fn load_with(
    explicit: Option<&Path>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    match explicit {
        Some(path) => load_from(path, log_level_override),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                load_from(path, log_level_override)
            } else {
                Ok(resolve(RawConfig::default(), log_level_override))
            }
        }
    }
}

/// Read one file and apply the optional log level override.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, log_level_override: Option<&str>) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    Ok(resolve(parsed, log_level_override))
}

fn resolve(parsed: RawConfig, log_level_override: Option<&str>) -> Config {
    let k = parsed.keydig;
    Config {
        log_level: log_level_override.unwrap_or(&k.log_level).to_string(),
        pretty: k.pretty,
        default_value: k.default_value,
    }
}
