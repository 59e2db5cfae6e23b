//! Subscriber setup for the `musiccast` binary
//!
//! The control panel owns the terminal, so nothing may be written to
//! stderr while it runs. Logs are either dropped or sent to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const ENV_LOG_MODE: &str = "MUSICCAST_LOG_MODE";
pub const ENV_LOG_LEVEL: &str = "MUSICCAST_LOG_LEVEL";

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No output; the default for the control panel
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose output with source locations
    Debug,
}

impl LoggingMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(LoggingMode::Silent),
            "development" | "dev" => Some(LoggingMode::Development),
            "debug" => Some(LoggingMode::Debug),
            _ => None,
        }
    }

    fn default_level(&self) -> &'static str {
        match self {
            LoggingMode::Silent => "off",
            LoggingMode::Development => "info",
            LoggingMode::Debug => "debug",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink<'a> {
    Stderr,
    File(&'a Path),
}

/// Install the global subscriber
///
/// `Silent` installs nothing unless a file sink is given, in which case
/// the file receives `Development`-level output.
pub fn init_logging(mode: LoggingMode, sink: Sink<'_>) -> Result<(), LoggingError> {
    let mode = match (mode, sink) {
        (LoggingMode::Silent, Sink::Stderr) => return Ok(()),
        (LoggingMode::Silent, Sink::File(_)) => LoggingMode::Development,
        (mode, _) => mode,
    };

    let filter = create_env_filter(mode.default_level(), |name| std::env::var(name).ok());
    let verbose = mode == LoggingMode::Debug;

    let result = match sink {
        Sink::Stderr => Registry::default()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .with_file(verbose)
                    .with_line_number(verbose)
                    .compact(),
            )
            .with(filter)
            .try_init(),
        Sink::File(path) => {
            let file = File::create(path).map_err(|source| LoggingError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
            Registry::default()
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_file(verbose)
                        .with_line_number(verbose),
                )
                .with(filter)
                .try_init()
        }
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Mode from `MUSICCAST_LOG_MODE`, falling back to `default`
pub fn mode_from_env(default: LoggingMode) -> LoggingMode {
    std::env::var(ENV_LOG_MODE)
        .ok()
        .and_then(|value| LoggingMode::parse(&value))
        .unwrap_or(default)
}

/// `MUSICCAST_LOG_LEVEL`, then `RUST_LOG`, then the mode's default
fn create_env_filter<F>(default_level: &str, lookup: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    let directives = lookup(ENV_LOG_LEVEL)
        .or_else(|| lookup("RUST_LOG"))
        .unwrap_or_else(|| default_level.to_string());
    EnvFilter::new(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("silent", Some(LoggingMode::Silent))]
    #[case("Development", Some(LoggingMode::Development))]
    #[case("dev", Some(LoggingMode::Development))]
    #[case(" debug ", Some(LoggingMode::Debug))]
    #[case("loud", None)]
    fn test_mode_parsing(#[case] value: &str, #[case] expected: Option<LoggingMode>) {
        assert_eq!(LoggingMode::parse(value), expected);
    }

    #[test]
    fn test_filter_precedence() {
        let filter = create_env_filter("info", |name| match name {
            ENV_LOG_LEVEL => Some("musiccast_api=trace".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(filter.to_string(), "musiccast_api=trace");

        let filter = create_env_filter("info", |name| match name {
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(filter.to_string(), "warn");

        let filter = create_env_filter("debug", |_| None);
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_silent_stderr_installs_nothing() {
        init_logging(LoggingMode::Silent, Sink::Stderr).unwrap();
        assert!(!tracing::dispatcher::has_been_set());
    }
}
