//! Environment-driven runtime configuration.
//!
//! # Invariants
//! - Blank variables behave exactly like unset ones.
//! - Resolution never fails; invalid levels surface later from
//!   `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "CURIOSITY_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "CURIOSITY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "CURIOSITY_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "curiosity_store.sqlite3";

/// Resolved runtime settings for hosts embedding the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    /// Log level passed to `init_logging`.
    pub log_level: String,
    /// Log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<String>,
}

impl SocialConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SocialConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = SocialConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(config.db_path.ends_with("curiosity_store.sqlite3"));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_trimmed_and_used() {
        let config = SocialConfig::from_lookup(|name| match name {
            DB_PATH_ENV => Some(" /tmp/social.db ".to_string()),
            LOG_LEVEL_ENV => Some("warn".to_string()),
            LOG_DIR_ENV => Some("/tmp/logs".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, PathBuf::from("/tmp/social.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/logs"));
    }
}
