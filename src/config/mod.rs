//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SENTIMENT_ANALYZER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sentiment_analyzer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SENTIMENT_ANALYZER";

/// Bare credential variable accepted for compatibility with existing deployments.
pub const API_KEY_VAR: &str = "API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote model configuration (credential, model, timeout)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Uses plain `API_KEY` as the default credential
    /// 3. Reads environment variables with `SENTIMENT_ANALYZER` prefix, which
    ///    take precedence
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SENTIMENT_ANALYZER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SENTIMENT_ANALYZER__AI__API_KEY=...` -> `ai.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing credential is reported by [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(api_key) = std::env::var(API_KEY_VAR) {
            builder = builder.set_default("ai.api_key", api_key)?;
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step; the binary refuses to start on error.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including a missing API key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("API_KEY");
        env::remove_var("SENTIMENT_ANALYZER__AI__API_KEY");
        env::remove_var("SENTIMENT_ANALYZER__AI__MODEL");
        env::remove_var("SENTIMENT_ANALYZER__SERVER__PORT");
        env::remove_var("SENTIMENT_ANALYZER__SERVER__ENVIRONMENT");
    }

    #[test]
    fn test_load_prefixed_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SENTIMENT_ANALYZER__AI__API_KEY", "prefixed-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("prefixed-key"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_bare_api_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("API_KEY", "bare-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("bare-key"));
    }

    #[test]
    fn test_prefixed_key_wins_over_bare_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("API_KEY", "bare-key");
        env::set_var("SENTIMENT_ANALYZER__AI__API_KEY", "prefixed-key");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ai.api_key.as_deref(), Some("prefixed-key"));
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_validated();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::MissingRequired("API_KEY")))
        ));
    }

    #[test]
    fn test_server_defaults_and_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("API_KEY", "k");
        env::set_var("SENTIMENT_ANALYZER__SERVER__PORT", "3000");
        env::set_var("SENTIMENT_ANALYZER__SERVER__ENVIRONMENT", "production");
        env::set_var("SENTIMENT_ANALYZER__AI__MODEL", "gemini-2.0-pro");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.ai.model, "gemini-2.0-pro");
    }
}
