//! Runtime configuration resolved from the process environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; every field has a default.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Overrides the slot database location.
pub const ENV_DB_PATH: &str = "DASHBOARD_DB_PATH";
/// Enables file logging into this absolute directory.
pub const ENV_LOG_DIR: &str = "DASHBOARD_LOG_DIR";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "DASHBOARD_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "dashboard.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub db_path: PathBuf,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_dir: None,
            log_level: default_log_level().to_string(),
        }
    }
}

impl DashboardConfig {
    /// Resolves configuration from `DASHBOARD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        let defaults = Self::default();
        Self {
            db_path: value(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
            log_level: value(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DashboardConfig::default());
        assert!(config.db_path.ends_with("dashboard.sqlite3"));
    }

    #[test]
    fn explicit_values_override_and_blank_values_are_ignored() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, " /data/dash.db "),
            (ENV_LOG_DIR, "   "),
            (ENV_LOG_LEVEL, "warn"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/dash.db"));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.log_level, "warn");
    }
}
