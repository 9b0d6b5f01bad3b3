//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COSMIC_SELF` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cosmic_self::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Digest roster at {}", config.sms.subscribers_file.display());
//! ```

mod error;
mod features;
mod runtime;
mod sms;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use runtime::{Environment, RuntimeConfig};
pub use sms::SmsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// SMS digest sender and schedule
    #[serde(default)]
    pub sms: SmsConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COSMIC_SELF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COSMIC_SELF__RUNTIME__LOG_LEVEL=debug` -> `runtime.log_level = debug`
    /// - `COSMIC_SELF__SMS__SCHEDULE_HOUR=9` -> `sms.schedule_hour = 9`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COSMIC_SELF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.sms.validate()?;
        Ok(())
    }

    /// Whether the scheduled digest should run.
    pub fn sms_digest_active(&self) -> bool {
        self.features.enable_sms_digest
    }
}
