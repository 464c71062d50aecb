//! Local store location.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    "survey.db".to_string()
}

const fn default_busy_timeout_ms() -> u64 {
    5_000
}

/// Longest wait for another writer's lock.
pub const MAX_BUSY_TIMEOUT_MS: u64 = 600_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path of the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// How long to wait for another process's write lock, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the store lives only for the lifetime of the process.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Reject a busy timeout above `MAX_BUSY_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming `database.busy_timeout_ms`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.busy_timeout_ms <= MAX_BUSY_TIMEOUT_MS {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "database.busy_timeout_ms".into(),
                reason: format!(
                    "must be at most {MAX_BUSY_TIMEOUT_MS}, got {}",
                    self.busy_timeout_ms
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_in_working_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "survey.db");
        assert!(!config.is_in_memory());
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unbounded_busy_timeout_rejected() {
        let config = DatabaseConfig {
            busy_timeout_ms: MAX_BUSY_TIMEOUT_MS + 1,
            ..DatabaseConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "database.busy_timeout_ms"
        ));
    }

    #[test]
    fn memory_path_detected() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            ..DatabaseConfig::default()
        };
        assert!(config.is_in_memory());
    }
}
