//! Configuration Module
//!
//! Loads cache and server settings from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_MS;

/// TTL call sites use for largely static reference data (countries,
/// categories): 1 hour
pub const REFERENCE_TTL_MS: u64 = 60 * 60 * 1000;

/// Cache and server configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in milliseconds for writes that don't specify one
    pub default_ttl_ms: u64,
    /// TTL in milliseconds callers pass for static reference data
    pub reference_ttl_ms: u64,
    /// HTTP admin server port
    pub server_port: u16,
    /// Expired-entry sweep interval in seconds; 0 disables the sweeper
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `REFERENCE_TTL_MS` - Reference-data TTL in milliseconds (default: 3600000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, 0 = off (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            reference_ttl_ms: env_or("REFERENCE_TTL_MS", defaults.reference_ttl_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            reference_ttl_ms: REFERENCE_TTL_MS,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl_ms, 300_000);
        assert_eq!(config.reference_ttl_ms, 3_600_000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env() {
        // All env handling in one test: the process environment is shared
        // between parallel tests.
        env::remove_var("DEFAULT_TTL_MS");
        env::remove_var("REFERENCE_TTL_MS");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.default_ttl_ms, 300_000);
        assert_eq!(config.reference_ttl_ms, 3_600_000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);

        env::set_var("DEFAULT_TTL_MS", "1500");
        env::set_var("CLEANUP_INTERVAL", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.default_ttl_ms, 1500);
        assert_eq!(config.cleanup_interval, 60);

        env::remove_var("DEFAULT_TTL_MS");
        env::remove_var("CLEANUP_INTERVAL");
    }
}
