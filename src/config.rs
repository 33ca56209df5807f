//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_REPORT_TTL_SECS;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream finance report API
    pub api_base_url: String,
    /// Lifetime in seconds of a cached report
    pub report_cache_ttl: u64,
    /// Prefer the `expiration` carried by a report over `report_cache_ttl`
    pub honor_payload_expiration: bool,
    /// Upstream request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `API_BASE_URL` - Upstream report API (default: http://127.0.0.1:7777)
    /// - `REPORT_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `HONOR_PAYLOAD_EXPIRATION` - Use the report's own expiration (default: false)
    /// - `REQUEST_TIMEOUT_MS` - Upstream request timeout (default: 10000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            report_cache_ttl: parse_var("REPORT_CACHE_TTL").unwrap_or(defaults.report_cache_ttl),
            honor_payload_expiration: parse_var("HONOR_PAYLOAD_EXPIRATION")
                .unwrap_or(defaults.honor_payload_expiration),
            request_timeout_ms: parse_var("REQUEST_TIMEOUT_MS")
                .unwrap_or(defaults.request_timeout_ms),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_base_url: "http://127.0.0.1:7777".to_string(),
            report_cache_ttl: DEFAULT_REPORT_TTL_SECS,
            honor_payload_expiration: false,
            request_timeout_ms: 10_000,
        }
    }
}
