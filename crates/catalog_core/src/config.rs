//! Runtime configuration loaded from environment variables.
//!
//! # Invariants
//! - Loading never fails: invalid values fall back to defaults with a warning.
//! - Pagination limits are always well formed (`1 <= default <= max`).

use crate::logging::default_log_level;
use crate::repo::search::{PaginationLimits, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use log::warn;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "CATALOG_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CATALOG_LOG_DIR";
pub const ENV_DEFAULT_PER_PAGE: &str = "CATALOG_DEFAULT_PER_PAGE";
pub const ENV_MAX_PER_PAGE: &str = "CATALOG_MAX_PER_PAGE";

/// Core settings shared by embedding applications and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Log level passed to [`crate::logging::init_logging`].
    pub log_level: String,
    /// Directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Page-size default and cap applied to search params.
    pub pagination: PaginationLimits,
}

impl CoreConfig {
    /// Loads configuration from the process environment.
    ///
    /// | Env Var                    | Default                  |
    /// |----------------------------|--------------------------|
    /// | `CATALOG_LOG_LEVEL`        | `default_log_level()`    |
    /// | `CATALOG_LOG_DIR`          | unset (logging disabled) |
    /// | `CATALOG_DEFAULT_PER_PAGE` | `15`                     |
    /// | `CATALOG_MAX_PER_PAGE`     | `100`                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup(ENV_LOG_LEVEL)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        let log_dir = lookup(ENV_LOG_DIR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let max_per_page = read_positive(&lookup, ENV_MAX_PER_PAGE, MAX_PER_PAGE);
        let default_per_page = read_positive(&lookup, ENV_DEFAULT_PER_PAGE, DEFAULT_PER_PAGE);

        Self {
            log_level,
            log_dir,
            pagination: PaginationLimits::new(default_per_page, max_per_page),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn read_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> u32 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!("event=config_load module=config status=fallback key={key} value={raw} default={default}");
            default
        }
    }
}
