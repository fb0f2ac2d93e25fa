//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MARKETPLACE_STORAGE_KEY` - Key the cart record is persisted under
//!   (default: `@marketplace:cart`)
//! - `MARKETPLACE_DATA_DIR` - Directory for the file-backed store. Only
//!   required by embedders that use [`crate::storage::FileStore`] (the CLI
//!   does); library embedders injecting their own store can leave it unset.

use std::path::PathBuf;

use thiserror::Error;

/// Default key for the persisted cart record.
pub const DEFAULT_STORAGE_KEY: &str = "@marketplace:cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart library configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key the serialized cart record is stored under.
    pub storage_key: String,
    /// Data directory for the file-backed store, when one is used.
    pub data_dir: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            data_dir: None,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (e.g. an
    /// empty storage key).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_key = get_env_or_default("MARKETPLACE_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MARKETPLACE_STORAGE_KEY".to_owned(),
                "storage key must not be empty".to_owned(),
            ));
        }

        let data_dir = get_optional_env("MARKETPLACE_DATA_DIR").map(PathBuf::from);

        Ok(Self {
            storage_key,
            data_dir,
        })
    }

    /// The data directory, for embedders that require the file-backed store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `MARKETPLACE_DATA_DIR` was
    /// not configured.
    pub fn require_data_dir(&self) -> Result<&PathBuf, ConfigError> {
        self.data_dir
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("MARKETPLACE_DATA_DIR".to_owned()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_require_data_dir() {
        let config = CartConfig::default();
        assert!(matches!(
            config.require_data_dir(),
            Err(ConfigError::MissingEnvVar(_))
        ));

        let config = CartConfig {
            data_dir: Some(PathBuf::from("/tmp/marketplace")),
            ..CartConfig::default()
        };
        assert_eq!(
            config.require_data_dir().expect("data dir"),
            &PathBuf::from("/tmp/marketplace")
        );
    }
}
