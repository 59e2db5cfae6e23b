//! Transport configuration
//!
//! The receiver is usually reached through a small forwarding proxy that
//! reads the `ProxyTo` header to pick the device. Without a proxy the base
//! URL points straight at the receiver.

use std::time::Duration;

use crate::ConfigError;

/// Environment variable holding the proxy base URL
pub const ENV_PROXY_URL: &str = "MUSICCAST_PROXY_URL";
/// Environment variable holding the receiver address (host or IP)
pub const ENV_HOST: &str = "MUSICCAST_HOST";
/// Environment variable holding the request timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "MUSICCAST_TIMEOUT_MS";

/// Application name announced in `X-AppName`
pub const DEFAULT_APP_NAME: &str = "MusicCast/1.0";
/// Application port announced in `X-AppPort`
pub const DEFAULT_APP_PORT: u16 = 41100;
/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Everything the transport needs to reach one receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Base URL requests are sent to, without trailing slash
    pub base_url: String,
    /// Receiver address, sent as `ProxyTo`
    pub target: String,
    pub app_name: String,
    pub app_port: u16,
    pub timeout: Duration,
}

impl TransportConfig {
    /// Configuration for talking to `target` directly, without a proxy
    pub fn direct(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            base_url: format!("http://{}", target),
            target,
            app_name: DEFAULT_APP_NAME.to_string(),
            app_port: DEFAULT_APP_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configuration for talking to `target` through the proxy at `base_url`
    pub fn proxied(base_url: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            ..Self::direct(target)
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_app(mut self, name: impl Into<String>, port: u16) -> Self {
        self.app_name = name.into();
        self.app_port = port;
        self
    }

    /// Build a configuration from the process environment
    ///
    /// - `MUSICCAST_HOST` (required): receiver address
    /// - `MUSICCAST_PROXY_URL` (optional): proxy base URL
    /// - `MUSICCAST_TIMEOUT_MS` (optional): request timeout
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let target = non_empty(ENV_HOST).ok_or(ConfigError::MissingVar(ENV_HOST))?;

        let config = match non_empty(ENV_PROXY_URL) {
            Some(proxy) => Self::proxied(proxy, target),
            None => Self::direct(target),
        };

        match non_empty(ENV_TIMEOUT_MS) {
            Some(raw) => {
                let millis = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: ENV_TIMEOUT_MS,
                        value: raw.clone(),
                    })?;
                Ok(config.with_timeout(Duration::from_millis(millis)))
            }
            None => Ok(config),
        }
    }

    /// Full URL for an API command such as `/main/getStatus`
    pub fn url_for(&self, command: &str) -> String {
        format!("{}{}{}", self.base_url, crate::API_ROOT, command)
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
