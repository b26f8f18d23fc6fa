//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root used when no override is configured.
const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache interval in seconds: entry expiry age and sweep period alike
    pub cache_ttl: u64,
    /// Root URL of the PokeAPI instance to query, without a trailing slash
    pub base_url: String,
    /// Outbound HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache interval in seconds (default: 5)
    /// - `POKEAPI_BASE_URL` - API root URL (default: `https://pokeapi.co/api/v2`)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| normalize_base_url(&v))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http_timeout: env::var("HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Returns the cache interval as a duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Returns the outbound request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 5,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 10,
        }
    }
}

/// Strips trailing slashes so request paths can be appended uniformly.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
