//! Dooray connection settings.

use std::env;
use std::fmt;
use std::time::Duration;

use super::error::{DoorayError, DoorayResult};

pub const TOKEN_ENV: &str = "DOORAY_API_TOKEN";
pub const API_URL_ENV: &str = "DOORAY_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.dooray.com";

/// Per-request timeout applied to every Dooray call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for talking to the Dooray API, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl Config {
    /// Build a config from an explicit base URL and token.
    ///
    /// Fails with [`DoorayError::Configuration`] when the token is blank.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> DoorayResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DoorayError::Configuration {
                message: format!("{TOKEN_ENV} environment variable is not set"),
            });
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Resolve the config from the process environment.
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. DOORAY_API_URL environment variable
    /// 3. Default: https://api.dooray.com
    pub fn from_env(api_url: Option<String>) -> DoorayResult<Self> {
        let base_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = env::var(TOKEN_ENV).unwrap_or_default();

        Self::new(base_url, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("dooray-api {}", self.token)
    }
}

// Keeps the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
