//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; without any set, the engine runs against the mock source
//! with the reference defaults.
//!
//! ## Content API (enables the remote source when set)
//! - `GEDUC_API_BASE_URL` - Base URL of the content API
//! - `GEDUC_API_TOKEN` - Optional bearer token
//! - `GEDUC_API_TIMEOUT_MS` - Request timeout (default: 10000)
//! - `GEDUC_API_RETRIES` - Extra attempts after a failure (default: 3)
//! - `GEDUC_API_RETRY_DELAY_MS` - Base backoff delay (default: 1000)
//! - `GEDUC_API_CACHE_TTL_MS` - Response cache TTL (default: 300000)
//! - `GEDUC_API_CACHE_CAPACITY` - Response cache entries (default: 100)
//!
//! ## Mock source
//! - `GEDUC_MOCK_DELAY_MIN_MS` / `GEDUC_MOCK_DELAY_MAX_MS` - Simulated
//!   latency range (defaults: 200 / 800; set both to 0 to disable)
//! - `GEDUC_MOCK_ERROR_RATE` - Injected failure probability (default: 0.05)
//!
//! ## Misc
//! - `GEDUC_SETTINGS_PATH` - Persisted settings file
//!   (default: geduc-settings.json)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::source::{
    ApiConfig, ContentSource, DelayRange, FetchError, MockConfig, MockSource, RemoteSource,
};
use crate::staleness::TtlPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Mock source settings, used when no API base URL is configured.
    pub mock: MockConfig,
    /// Content API settings; `Some` enables the remote source.
    pub api: Option<ApiConfig>,
    /// Staleness policy for the cache store.
    pub ttl: TtlPolicy,
    /// Where persisted user settings live.
    pub settings_path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            mock: MockConfig::default(),
            api: None,
            ttl: TtlPolicy::default(),
            settings_path: PathBuf::from("geduc-settings.json"),
        }
    }
}

impl ContentConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let delay_min = parse_env("GEDUC_MOCK_DELAY_MIN_MS", 200_u64)?;
        let delay_max = parse_env("GEDUC_MOCK_DELAY_MAX_MS", 800_u64)?;
        let error_rate = parse_env("GEDUC_MOCK_ERROR_RATE", 0.05_f64)?;
        if !(0.0..=1.0).contains(&error_rate) {
            return Err(ConfigError::InvalidEnvVar(
                "GEDUC_MOCK_ERROR_RATE".to_string(),
                format!("must be within 0..=1 (got {error_rate})"),
            ));
        }

        let mock = MockConfig {
            delay: (delay_max > 0).then_some(DelayRange {
                min_ms: delay_min,
                max_ms: delay_max,
            }),
            error_rate,
            ..MockConfig::default()
        };

        let api = match get_optional_env("GEDUC_API_BASE_URL") {
            Some(raw) => {
                let base_url = Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("GEDUC_API_BASE_URL".to_string(), e.to_string())
                })?;
                let mut api = ApiConfig::new(base_url);
                api.timeout = Duration::from_millis(parse_env("GEDUC_API_TIMEOUT_MS", 10_000)?);
                api.retries = parse_env("GEDUC_API_RETRIES", 3)?;
                api.retry_delay =
                    Duration::from_millis(parse_env("GEDUC_API_RETRY_DELAY_MS", 1_000)?);
                api.cache_ttl = Duration::from_millis(parse_env("GEDUC_API_CACHE_TTL_MS", 300_000)?);
                api.cache_capacity = parse_env("GEDUC_API_CACHE_CAPACITY", 100)?;
                api.api_token = get_optional_env("GEDUC_API_TOKEN").map(SecretString::from);
                Some(api)
            }
            None => None,
        };

        let settings_path = get_optional_env("GEDUC_SETTINGS_PATH")
            .map_or_else(|| PathBuf::from("geduc-settings.json"), PathBuf::from);

        Ok(Self {
            mock,
            api,
            ttl: TtlPolicy::default(),
            settings_path,
        })
    }

    /// Build the configured content source: remote when an API base URL is
    /// set, mock fixtures otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote HTTP client cannot be constructed.
    pub fn source(&self) -> Result<Box<dyn ContentSource>, FetchError> {
        match &self.api {
            Some(api) => Ok(Box::new(RemoteSource::new(api.clone())?)),
            None => Ok(Box::new(MockSource::new(self.mock.clone()))),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_mock_source() {
        let config = ContentConfig::default();
        assert!(config.api.is_none());
        assert!((config.mock.error_rate - 0.05).abs() < f64::EPSILON);
        // Builds without touching the network
        let _source = config.source().unwrap();
    }

    #[test]
    fn test_remote_source_selected_when_api_configured() {
        let config = ContentConfig {
            api: Some(ApiConfig::new(
                Url::parse("https://api.geduc.org.br/v1").unwrap(),
            )),
            ..ContentConfig::default()
        };
        let _source = config.source().unwrap();
    }
}
