//! Image provider configuration.

use std::fmt;

use reqwest::Url;
use tracing::{debug, info};

use crate::error::ConfigError;

pub const ACCESS_KEY_VAR: &str = "WHATTOEAT_UNSPLASH_ACCESS_KEY";
pub const ENDPOINT_VAR: &str = "WHATTOEAT_UNSPLASH_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://api.unsplash.com/photos/random";

/// Unsplash access key. `Debug` and `Display` never show the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(<redacted>)")
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[derive(Clone, Debug)]
pub struct ImageConfig {
    pub endpoint: Url,
    pub access_key: AccessKey,
}

impl ImageConfig {
    pub fn new(endpoint: &str, access_key: AccessKey) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            endpoint,
            access_key,
        })
    }

    /// Load from the process environment, reading a `.env` file first if one exists.
    ///
    /// `WHATTOEAT_UNSPLASH_ACCESS_KEY` is required.
    /// `WHATTOEAT_UNSPLASH_ENDPOINT` defaults to the random photo endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("loaded environment from {}", path.display()),
            Err(e) => debug!("no .env file loaded: {}", e),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(ACCESS_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(AccessKey::new)
            .ok_or(ConfigError::MissingAccessKey(ACCESS_KEY_VAR))?;

        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self::new(&endpoint, access_key)
    }
}
