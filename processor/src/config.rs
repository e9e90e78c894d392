//! Process configuration, built once at startup and passed into the
//! workflow explicitly rather than read from ambient globals.

use std::env;
use std::time::Duration;

use crate::error::{ProcessorError, ProcessorResult};

/// Admin API version the integration was built against.
pub const DEFAULT_API_VERSION: &str = "2023-10";

const DEFAULT_MAX_ATTEMPTS: u32 = 6;
const DEFAULT_DELAY_SECS: u64 = 30;

/// Connection settings for the commerce store, fixed for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://example.myshopify.com`
    pub base_url: String,
    pub access_token: String,
    pub api_version: String,
}

impl StoreConfig {
    /// Load from the environment: `SHOPIFY_DOMAIN`, `SHOPIFY_ADMIN_API_KEY`,
    /// optional `SHOPIFY_API_VERSION`.
    pub fn from_env() -> ProcessorResult<Self> {
        let domain = env::var("SHOPIFY_DOMAIN").map_err(|_| ProcessorError::Config {
            message: "SHOPIFY_DOMAIN must be set".to_string(),
        })?;
        let access_token = env::var("SHOPIFY_ADMIN_API_KEY").map_err(|_| ProcessorError::Config {
            message: "SHOPIFY_ADMIN_API_KEY must be set".to_string(),
        })?;
        let api_version =
            env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Ok(Self::new(&domain, access_token, api_version))
    }

    /// Build a config from a bare store domain or a full base URL.
    pub fn new(domain_or_url: &str, access_token: String, api_version: String) -> Self {
        let trimmed = domain_or_url.trim_end_matches('/');
        let base_url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        Self {
            base_url,
            access_token,
            api_version,
        }
    }
}

/// Bounded-retry settings for the licenses metafield poll.
///
/// The total window (attempts x delay) must exceed the platform's expected
/// propagation delay for the awaited metafield; the defaults give 6 x 30s.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
        }
    }
}

impl RetryPolicy {
    /// Load overrides from `POLL_MAX_ATTEMPTS` / `POLL_DELAY_SECS`, falling
    /// back to the defaults.
    pub fn from_env() -> ProcessorResult<Self> {
        let max_attempts = match env::var("POLL_MAX_ATTEMPTS") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| ProcessorError::Config {
                message: format!("POLL_MAX_ATTEMPTS is not a number: {raw}"),
            })?,
            Err(_) => DEFAULT_MAX_ATTEMPTS,
        };
        if max_attempts == 0 {
            return Err(ProcessorError::Config {
                message: "POLL_MAX_ATTEMPTS must be at least 1".to_string(),
            });
        }

        let delay_secs = match env::var("POLL_DELAY_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ProcessorError::Config {
                message: format!("POLL_DELAY_SECS is not a number: {raw}"),
            })?,
            Err(_) => DEFAULT_DELAY_SECS,
        };

        Ok(Self {
            max_attempts,
            delay: Duration::from_secs(delay_secs),
        })
    }
}
