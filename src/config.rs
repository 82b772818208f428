//! Configuration Module
//!
//! Server configuration from environment variables, read once at startup and
//! immutable thereafter.

use std::env;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold, always >= 1
    pub max_size: usize,
    /// Default TTL in seconds for entries stored without one; None = never
    pub default_ttl: Option<u64>,
    /// Sweeper wake-up interval in seconds
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000, min: 1)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds; 0 or absent disables it
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 2)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        let default_ttl = env::var("CACHE_DEFAULT_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0);

        Self {
            max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1000)
                .max(1),
            default_ttl,
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: 1000,
            default_ttl: None,
            sweep_interval: 2,
            server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.default_ttl, None);
        assert_eq!(config.sweep_interval, 2);
        assert_eq!(config.server_port, 8080);
    }

    // Environment mutation is process-wide, so everything touching env vars
    // runs inside one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_MAX_SIZE");
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_SWEEP_INTERVAL");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.default_ttl, None);
        assert_eq!(config.sweep_interval, 2);
        assert_eq!(config.server_port, 8080);

        // CACHE_DEFAULT_TTL=0 disables default expiry
        env::set_var("CACHE_DEFAULT_TTL", "0");
        assert_eq!(Config::from_env().default_ttl, None);
        env::set_var("CACHE_DEFAULT_TTL", "300");
        assert_eq!(Config::from_env().default_ttl, Some(300));
        env::remove_var("CACHE_DEFAULT_TTL");

        // capacity is clamped to at least one entry
        env::set_var("CACHE_MAX_SIZE", "0");
        assert_eq!(Config::from_env().max_size, 1);
        env::remove_var("CACHE_MAX_SIZE");
    }
}
