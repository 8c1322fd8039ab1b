//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_CACHE_TTL_SECS;
use crate::upstream::DEFAULT_BASE_URL;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key, sent as a query parameter on every upstream call
    pub api_key: String,
    /// Provider base URL
    pub api_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Cache freshness window in seconds
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_KEY` - Provider API key (default: empty)
    /// - `WEATHER_API_BASE_URL` - Provider base URL (default: `https://api.weatherapi.com/v1`)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECS` - Freshness window in seconds (default: 900)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("WEATHER_API_KEY").unwrap_or_default(),
            api_base_url: env::var("WEATHER_API_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
        }
    }

    /// Freshness window as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            server_port: 3000,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.api_base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl(), Duration::from_secs(15 * 60));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("WEATHER_API_BASE_URL");
        env::remove_var("CACHE_TTL_SECS");
        env::set_var("WEATHER_API_KEY", "abc123");
        env::set_var("PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl_secs, 900);

        env::set_var("PORT", "8080");
        env::set_var("CACHE_TTL_SECS", "60");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));

        env::remove_var("WEATHER_API_KEY");
        env::remove_var("PORT");
        env::remove_var("CACHE_TTL_SECS");
    }
}
