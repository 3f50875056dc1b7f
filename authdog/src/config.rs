//! Client configuration.

use crate::error::{AuthdogError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.authdog.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_BASE_URL: &str = "AUTHDOG_BASE_URL";
pub const ENV_API_KEY: &str = "AUTHDOG_API_KEY";
pub const ENV_TIMEOUT_MS: &str = "AUTHDOG_TIMEOUT_MS";

/// Configuration for an [`AuthdogClient`](crate::AuthdogClient).
///
/// # Example
///
/// ```rust
/// use authdog::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://api.authdog.com/")
///     .with_api_key("my-api-key")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service base URL. Trailing slashes are removed when the client is built.
    pub base_url: String,
    /// Static credential, used when a call carries no access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request timeout.
    #[serde(rename = "timeout_ms", with = "duration_ms", default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), api_key: None, timeout: DEFAULT_TIMEOUT }
    }
}

impl ClientConfig {
    /// Configuration for `base_url` with the default timeout and no API key.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service root, for example `https://api.authdog.com`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Set the static credential used when a call carries no access token.
    /// An empty key counts as unset.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `AUTHDOG_BASE_URL`, `AUTHDOG_API_KEY` and `AUTHDOG_TIMEOUT_MS`.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        config.api_key = lookup(ENV_API_KEY).filter(|v| !v.is_empty());

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|e| {
                AuthdogError::Config(format!("{ENV_TIMEOUT_MS} must be an integer: {e}"))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// API key if one is configured and non-empty.
    pub(crate) fn effective_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Strip trailing slashes and check the scheme.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AuthdogError::Config("base URL must not be empty".to_string()));
    }

    let parsed = url::Url::parse(trimmed)
        .map_err(|e| AuthdogError::Config(format!("invalid base URL '{trimmed}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AuthdogError::Config(format!(
            "base URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }

    Ok(trimmed.to_string())
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer, ser};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).map_err(ser::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
