//! Content layer settings.
//!
//! Values come from `STRAPI_*` / `USE_STRAPI` environment variables, but the
//! lookup is injectable so tests never touch the process environment.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_API_PREFIX: &str = "/api";
/// Cache lifetime hint when a request does not specify one.
pub const DEFAULT_REVALIDATE_SECS: u64 = 60;

pub const ENV_BASE_URL: &str = "STRAPI_URL";
pub const ENV_API_PREFIX: &str = "STRAPI_API_PREFIX";
pub const ENV_API_TOKEN: &str = "STRAPI_API_TOKEN";
pub const ENV_CMS_ENABLED: &str = "USE_STRAPI";
pub const ENV_REVALIDATE: &str = "STRAPI_REVALIDATE_SECONDS";
pub const ENV_TIMEOUT: &str = "STRAPI_TIMEOUT_SECONDS";

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid boolean for `{key}`: {value:?}")]
    InvalidBool { key: String, value: String },

    #[error("invalid number of seconds for `{key}`: {value:?}")]
    InvalidSeconds { key: String, value: String },

    #[error("invalid CMS base URL: {0:?}")]
    InvalidBaseUrl(String),
}

/// Settings for the content retrieval layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub api_token: Option<String>,
    /// CMS-backed content when true, static fallback content when false.
    pub cms_enabled: bool,
    pub default_revalidate_secs: u64,
    /// `None` leaves requests without a client-side timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            api_token: None,
            cms_enabled: false,
            default_revalidate_secs: DEFAULT_REVALIDATE_SECS,
            request_timeout: None,
        }
    }
}

impl ContentConfig {
    /// Config pointing at `base_url` with the CMS enabled.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cms_enabled: true,
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.api_token = Some(token.to_string());
        self
    }

    pub fn with_cms_enabled(mut self, enabled: bool) -> Self {
        self.cms_enabled = enabled;
        self
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let api_prefix = get(ENV_API_PREFIX)
            .map(|p| normalize_prefix(&p))
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

        let cms_enabled = match get(ENV_CMS_ENABLED) {
            Some(raw) => parse_bool(ENV_CMS_ENABLED, &raw)?,
            None => false,
        };

        let default_revalidate_secs = match get(ENV_REVALIDATE) {
            Some(raw) => parse_seconds(ENV_REVALIDATE, &raw)?,
            None => DEFAULT_REVALIDATE_SECS,
        };

        let request_timeout = match get(ENV_TIMEOUT) {
            Some(raw) => Some(Duration::from_secs(parse_seconds(ENV_TIMEOUT, &raw)?)),
            None => None,
        };

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_prefix,
            api_token: get(ENV_API_TOKEN),
            cms_enabled,
            default_revalidate_secs,
            request_timeout,
        };

        log::debug!(
            "CONFIG_LOADED base_url={} prefix={} token={} cms_enabled={} revalidate={}",
            config.base_url,
            config.api_prefix,
            config.api_token.is_some(),
            config.cms_enabled,
            config.default_revalidate_secs
        );

        Ok(config)
    }

    /// `base_url` + `api_prefix`, without a trailing slash.
    pub fn api_root(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_prefix.trim_end_matches('/')
        )
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_seconds(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidSeconds {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
