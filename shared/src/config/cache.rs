//! Session store (Redis) configuration

use serde::{Deserialize, Serialize};

/// Redis session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Per-operation response timeout in seconds
    ///
    /// Every store round-trip is bounded by this; a timeout is treated
    /// as a store failure and the caller fails closed.
    #[serde(default = "default_response_timeout")]
    pub response_timeout: u64,

    /// Maximum retry attempts for transient errors
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (exponential backoff)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: default_connection_timeout(),
            response_timeout: default_response_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let response_timeout = std::env::var("REDIS_RESPONSE_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_response_timeout);

        Self {
            url,
            response_timeout,
            ..Default::default()
        }
    }
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_response_timeout() -> u64 {
    2
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
