//! Configuration for Restage clients.
//!
//! This module provides the configuration type shared by all Restage clients:
//! where the API lives, how to authenticate against it, and an optional
//! request timeout override.

use crate::error::{Error, Result};
use secrecy::SecretString;
use std::time::Duration;
use validator::Validate;

/// Default base URL for the hosted Restage API.
pub const DEFAULT_BASE_URL: &str = "https://api.restage.example";

/// Environment variable consulted for the API key when none is given explicitly.
pub const API_KEY_ENV: &str = "RESTAGE_API_KEY";

/// Configuration for a Restage client instance.
///
/// The API key is stored as a [`SecretString`] and is only exposed when the
/// `Authorization` header is built; it never appears in `Debug` output.
#[derive(Debug, Clone, Validate)]
pub struct ApiConfig {
    /// Base URL of the Restage API
    #[validate(url)]
    pub base_url: String,

    /// Bearer token used to authenticate requests
    pub api_key: SecretString,

    /// Optional request timeout override in seconds.
    ///
    /// When unset, each operation uses the default timeout of its
    /// operation family.
    #[validate(range(min = 1, max = 600))]
    pub timeout_override_secs: Option<u64>,
}

impl ApiConfig {
    /// Create a configuration for the hosted API with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::from(api_key),
            timeout_override_secs: None,
        })
    }

    /// Create a configuration from the `RESTAGE_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Self::new(key),
            _ => Err(Error::MissingApiKey),
        }
    }

    /// Point the configuration at a different API deployment.
    ///
    /// A trailing slash is stripped so endpoint paths can be appended
    /// uniformly. The URL is validated when a client is built.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout for every operation, in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_override_secs = Some(seconds);
        self
    }

    /// Get the timeout override as a Duration, if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_override_secs.map(Duration::from_secs)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the base URL is malformed or the
    /// timeout override is outside the accepted range.
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_api_config_new() {
        let config = ApiConfig::new("sk-test").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key.expose_secret(), "sk-test");
        assert!(config.timeout_override_secs.is_none());
    }

    #[test]
    fn test_api_config_empty_key() {
        let result = ApiConfig::new("");
        assert_eq!(result.unwrap_err(), Error::MissingApiKey);
    }

    #[test]
    fn test_api_config_builder() {
        let config = ApiConfig::new("sk-test")
            .unwrap()
            .with_base_url("https://staging.restage.example/")
            .with_timeout(45);

        assert_eq!(config.base_url, "https://staging.restage.example");
        assert_eq!(config.timeout_override_secs, Some(45));
        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_api_config_strips_trailing_slashes() {
        let config = ApiConfig::new("sk-test")
            .unwrap()
            .with_base_url("https://api.restage.example///");
        assert_eq!(config.base_url, "https://api.restage.example");
    }

    #[test]
    fn test_api_config_validate_url() {
        let config = ApiConfig::new("sk-test").unwrap();
        assert!(config.validate().is_ok());

        let config = config.with_base_url("not-a-url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_config_validate_timeout_range() {
        let mut config = ApiConfig::new("sk-test").unwrap();
        config.timeout_override_secs = Some(0);
        assert!(config.validate().is_err());

        config.timeout_override_secs = Some(601);
        assert!(config.validate().is_err());

        config.timeout_override_secs = Some(120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_config_ensure_valid() {
        let config = ApiConfig::new("sk-test").unwrap();
        assert!(config.ensure_valid().is_ok());

        let config = config.with_base_url("not-a-url");
        let err = config.ensure_valid().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_api_config_debug_redacts_key() {
        let config = ApiConfig::new("sk-secret-value").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret-value"));
    }

    // The environment is process-global, so every env mutation lives in this
    // single test to keep the suite parallel-safe.
    #[test]
    fn test_api_config_from_env() {
        std::env::set_var(API_KEY_ENV, "sk-from-env");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.api_key.expose_secret(), "sk-from-env");

        std::env::set_var(API_KEY_ENV, "");
        assert_eq!(ApiConfig::from_env().unwrap_err(), Error::MissingApiKey);

        std::env::remove_var(API_KEY_ENV);
        assert_eq!(ApiConfig::from_env().unwrap_err(), Error::MissingApiKey);
    }
}
