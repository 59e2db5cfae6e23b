//! Error types for the HTTP transport

use thiserror::Error;

/// Errors that can occur while talking to a receiver
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network failure, connection refusal or request timeout
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The receiver (or proxy) answered with a non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body was not valid JSON
    #[error("JSON parsing error: {0}")]
    Parse(String),
}

/// Errors raised while assembling a [`TransportConfig`](crate::TransportConfig)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}
