//! # survey-config
//!
//! Layered configuration loading for the survey store using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY_*` prefix, `__` as separator)
//! 2. Project-level `.survey/config.toml`
//! 3. User-level `~/.config/survey/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SURVEY_DATABASE__PATH` -> `database.path` and
//! `SURVEY_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.
//! `SURVEY_DATABASE__BUSY_TIMEOUT_MS` sets how long a write waits for
//! another process holding the same database file.
//!
//! ```no_run
//! use survey_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv().expect("config");
//! println!("store at {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::{DatabaseConfig, MAX_BUSY_TIMEOUT_MS};
pub use error::ConfigError;
pub use general::{GeneralConfig, MAX_LIMIT};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SurveyConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.database.validate()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".survey/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SURVEY_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|_jail| {
            let config = SurveyConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.database.path, "survey.db");
            assert_eq!(config.general.default_limit, 10);
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_dir(".survey")?;
            jail.create_file(
                ".survey/config.toml",
                r#"
                [database]
                path = "data/local.db"

                [general]
                default_limit = 25
                "#,
            )?;
            let config = SurveyConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.database.path, "data/local.db");
            assert_eq!(config.general.default_limit, 25);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_dir(".survey")?;
            jail.create_file(".survey/config.toml", "[database]\npath = \"file.db\"\n")?;
            jail.set_env("SURVEY_DATABASE__PATH", ":memory:");
            let config = SurveyConfig::load().map_err(|e| e.to_string())?;
            assert!(config.database.is_in_memory());
            Ok(())
        });
    }

    #[test]
    fn busy_timeout_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("SURVEY_DATABASE__BUSY_TIMEOUT_MS", "250");
            let config = SurveyConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.database.busy_timeout_ms, 250);
            assert_eq!(config.database.path, "survey.db");
            Ok(())
        });
    }

    #[test]
    fn out_of_range_limit_fails_load() {
        Jail::expect_with(|jail| {
            jail.set_env("SURVEY_GENERAL__DEFAULT_LIMIT", "500");
            let err = SurveyConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
            Ok(())
        });
    }

    #[test]
    fn explicit_toml_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\ndefault_limit = 3\n").unwrap();

        let figment = Figment::from(Serialized::defaults(SurveyConfig::default()))
            .merge(Toml::file(&path));
        let config = SurveyConfig::from_figment(&figment).unwrap();
        assert_eq!(config.general.default_limit, 3);
        assert_eq!(config.database.path, "survey.db");
    }
}
