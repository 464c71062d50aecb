//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default page size for list commands.
const fn default_limit() -> u32 {
    10
}

/// Largest page a list command may request.
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// Reject a page size outside `1..=MAX_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming `general.default_limit`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_LIMIT).contains(&self.default_limit) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: format!("must be between 1 and {MAX_LIMIT}, got {}", self.default_limit),
            })
        }
    }
}
