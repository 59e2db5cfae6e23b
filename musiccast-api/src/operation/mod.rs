//! Operation framework for Extended Control commands
//!
//! Every receiver capability is a type implementing [`MusicCastOperation`].
//! An operation knows its command name, the path segment it lives under
//! (a zone, a playback source or a fixed service), which query parameters
//! it sends and how its response decodes. [`Command`] is the resulting
//! request, ready to hand to a [`Transport`](http_client::Transport).
//!
//! Most operations are declared through the table macros in [`macros`].

pub mod macros;

use serde::de::DeserializeOwned;
pub use serde_json::Value;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Required parameter '{parameter}' is missing")]
    MissingParameter { parameter: String },
}

impl ValidationError {
    pub fn range_error(
        parameter: &str,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing(parameter: &str) -> Self {
        Self::MissingParameter {
            parameter: parameter.to_string(),
        }
    }
}

/// HTTP method of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Rendering of a value as a query parameter
///
/// `None` means "leave the parameter out".
pub trait QueryValue {
    fn to_query(&self) -> Option<String>;
}

impl QueryValue for bool {
    fn to_query(&self) -> Option<String> {
        Some(if *self { "true" } else { "false" }.to_string())
    }
}

impl QueryValue for String {
    fn to_query(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl QueryValue for &str {
    fn to_query(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn to_query(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.to_query())
    }
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_query_value!(u8, u16, u32, u64, i8, i16, i32, i64);

/// A fully built request for one Extended Control command
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub method: Method,
    /// Path below the API root, e.g. `/main/setVolume`
    pub path: String,
    /// Query parameters in the order they are sent
    pub query: Vec<(&'static str, String)>,
    /// JSON payload of POST commands
    pub body: Option<Value>,
}

impl Command {
    /// Path plus encoded query string, e.g. `/main/setVolume?volume=30`
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
                format!("{}={}", key, encoded)
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }

    /// Value of a query parameter, if present
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Base trait for all MusicCast API operations
///
/// Implementations are normally generated by
/// [`define_operation!`](crate::define_operation). The provided
/// [`build_command`](Self::build_command) validates the request and then
/// assembles `/{scope}/{COMMAND}?{query}`.
pub trait MusicCastOperation {
    /// The request type for this operation
    type Request;

    /// The response type for this operation
    type Response: DeserializeOwned;

    /// Command name as it appears in the URL, e.g. `setVolume`
    const COMMAND: &'static str;

    const METHOD: Method = Method::Get;

    /// First path segment: a zone token, a source or a service name
    fn scope(request: &Self::Request) -> &str;

    /// Query parameters; entries rendering to `None` are dropped
    fn query(request: &Self::Request) -> Vec<(&'static str, Option<String>)>;

    /// Reject requests that must never reach the receiver
    fn validate(_request: &Self::Request) -> Result<(), ValidationError> {
        Ok(())
    }

    /// JSON payload for POST commands
    fn body(_request: &Self::Request) -> Option<Value> {
        None
    }

    fn build_command(request: &Self::Request) -> Result<Command, ValidationError> {
        Self::validate(request)?;

        Ok(Command {
            method: Self::METHOD,
            path: format!("/{}/{}", Self::scope(request), Self::COMMAND),
            query: Self::query(request)
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
            body: Self::body(request),
        })
    }
}
