//! Private HTTP client for MusicCast receiver communication
//!
//! This crate provides the minimal transport the receiver's Extended
//! Control API needs: a GET or POST against
//! `{base}/YamahaExtendedControl/v1{command}` carrying the identification
//! headers the receiver (or its forwarding proxy) expects, with a single
//! bounded timeout. Successful responses are unwrapped to their JSON body.
//! There are no retries.

mod config;
mod error;

pub use config::{
    TransportConfig, DEFAULT_APP_NAME, DEFAULT_APP_PORT, DEFAULT_TIMEOUT, ENV_HOST,
    ENV_PROXY_URL, ENV_TIMEOUT_MS,
};
pub use error::{ConfigError, HttpError};

use serde_json::Value;

/// Path prefix of every Extended Control command
pub const API_ROOT: &str = "/YamahaExtendedControl/v1";

/// Header names required by the receiver's access-control scheme
pub mod headers {
    pub const APP_NAME: &str = "X-AppName";
    pub const APP_PORT: &str = "X-AppPort";
    pub const PROXY_TO: &str = "ProxyTo";
}

/// Anything that can carry a command to a receiver and hand back its body
///
/// `command` is the API path below [`API_ROOT`], including the query
/// string, e.g. `/main/setVolume?volume=30`.
pub trait Transport: Send + Sync {
    fn get(&self, command: &str) -> Result<Value, HttpError>;

    fn post(&self, command: &str, body: &Value) -> Result<Value, HttpError>;
}

/// A minimal blocking HTTP client for one receiver
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    config: TransportConfig,
}

impl HttpClient {
    /// Create a client; the timeout covers the whole request including the body
    pub fn new(config: TransportConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(config.timeout).build(),
            config,
        }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn request(&self, method: &str, command: &str) -> ureq::Request {
        let url = self.config.url_for(command);
        tracing::debug!(method, url = %url, "sending receiver request");

        self.agent
            .request(method, &url)
            .set(headers::APP_NAME, &self.config.app_name)
            .set(headers::APP_PORT, &self.config.app_port.to_string())
            .set(headers::PROXY_TO, &self.config.target)
    }

    fn unwrap_body(
        command: &str,
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<Value, HttpError> {
        let response = result.map_err(|e| {
            let error = match e {
                ureq::Error::Status(code, _) => HttpError::Status(code),
                ureq::Error::Transport(transport) => HttpError::Network(transport.to_string()),
            };
            tracing::warn!(command, error = %error, "receiver request failed");
            error
        })?;

        // ureq only rejects >= 400; anything else outside 2xx is a failure too
        let status = response.status();
        if !(200..300).contains(&status) {
            tracing::warn!(command, status, "receiver answered with non-success status");
            return Err(HttpError::Status(status));
        }

        response.into_json::<Value>().map_err(|e| {
            // ureq reports undecodable JSON as InvalidData; anything else is the socket
            if e.kind() == std::io::ErrorKind::InvalidData {
                HttpError::Parse(e.to_string())
            } else {
                HttpError::Network(e.to_string())
            }
        })
    }
}

impl Transport for HttpClient {
    fn get(&self, command: &str) -> Result<Value, HttpError> {
        Self::unwrap_body(command, self.request("GET", command).call())
    }

    fn post(&self, command: &str, body: &Value) -> Result<Value, HttpError> {
        Self::unwrap_body(command, self.request("POST", command).send_json(body))
    }
}
