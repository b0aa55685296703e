//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `UNICONNECT`
//! prefix and `__` (double underscore) as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use uniconnect_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("User slot lives in {}", config.storage.data_dir);
//! ```

mod assets;
mod error;
mod storage;

pub use assets::AssetsConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Durable storage (user slot location).
    #[serde(default)]
    pub storage: StorageConfig,

    /// Presentation asset defaults.
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variable Format
    ///
    /// - `UNICONNECT__STORAGE__DATA_DIR=/var/lib/uniconnect` -> `storage.data_dir`
    /// - `UNICONNECT__ASSETS__PLACEHOLDER_IMAGE=/img/blank.svg` -> `assets.placeholder_image`
    ///
    /// A `.env` file is honored in development.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Every field has a default, so an empty environment loads fine.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("UNICONNECT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.assets.validate()?;
        Ok(())
    }
}
