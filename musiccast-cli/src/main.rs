use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use http_client::{TransportConfig, ENV_HOST, ENV_PROXY_URL, ENV_TIMEOUT_MS};
use musiccast_api::{MusicCastClient, Zone};

mod commands;
mod logging;
mod panel;

use commands::Commands;
use logging::{LoggingMode, Sink};

/// MusicCast receiver control
///
/// Connection settings come from flags, falling back to MUSICCAST_HOST,
/// MUSICCAST_PROXY_URL and MUSICCAST_TIMEOUT_MS.
#[derive(Parser, Debug)]
#[command(name = "musiccast")]
#[command(about = "Control panel and command line for MusicCast receivers")]
#[command(version)]
pub struct Args {
    /// Receiver address (host or host:port)
    #[arg(long)]
    pub host: Option<String>,

    /// Base URL of a forwarding proxy; requests go straight to the host when unset
    #[arg(long)]
    pub proxy_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Zone to control: main, zone2..zone4 or 1..4
    #[arg(short, long, default_value = "main")]
    pub zone: String,

    /// Seconds between status polls in the panel
    #[arg(short, long, default_value = "5")]
    pub interval: u64,

    /// Write logs to this file (the panel is otherwise silent)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Flags win over the environment
    pub fn transport_config<F>(&self, env: F) -> Result<TransportConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = TransportConfig::from_lookup(|name| match name {
            ENV_HOST => self.host.clone().or_else(|| env(name)),
            ENV_PROXY_URL => self.proxy_url.clone().or_else(|| env(name)),
            ENV_TIMEOUT_MS => self.timeout_ms.map(|ms| ms.to_string()).or_else(|| env(name)),
            _ => env(name),
        })
        .context("invalid connection settings (try --host)")?;
        Ok(config)
    }

    pub fn zone(&self) -> Result<Zone> {
        Zone::resolve(self.zone.as_str()).context("invalid --zone")
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            return Err(anyhow::anyhow!("Poll interval must be at least one second"));
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    let command = args.command.clone().unwrap_or(Commands::Panel);
    let interactive = command == Commands::Panel;

    // The panel owns the terminal; one-shot commands may log to stderr
    let default_mode = if interactive {
        LoggingMode::Silent
    } else {
        LoggingMode::Development
    };
    let sink = match &args.log_file {
        Some(path) => Sink::File(path),
        None => Sink::Stderr,
    };
    logging::init_logging(logging::mode_from_env(default_mode), sink)?;

    let config = args.transport_config(|name| std::env::var(name).ok())?;
    let zone = args.zone()?;
    let host = config.target.clone();
    let client = MusicCastClient::new(config);

    tracing::debug!(host = %host, zone = %zone, ?command, "starting");

    if interactive {
        return panel::run(client, zone, &host, Duration::from_secs(args.interval));
    }

    let body = commands::execute(&client, zone, &command)?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_panel_on_main() {
        let args = parse(&["musiccast", "--host", "192.168.0.31"]);
        assert_eq!(args.command, None);
        assert_eq!(args.zone().unwrap(), Zone::Main);
        assert_eq!(args.interval, 5);
    }

    #[test]
    fn test_flags_override_environment() {
        let args = parse(&["musiccast", "--host", "10.0.0.5", "--timeout-ms", "250", "status"]);
        let config = args
            .transport_config(|name| match name {
                ENV_HOST => Some("192.168.0.31".to_string()),
                ENV_PROXY_URL => Some("http://proxy:8080/".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.target, "10.0.0.5");
        assert_eq!(config.base_url, "http://proxy:8080");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_missing_host_is_an_error() {
        let args = parse(&["musiccast", "status"]);
        assert!(args.transport_config(|_| None).is_err());
    }

    #[test]
    fn test_zone_by_index() {
        let args = parse(&["musiccast", "--host", "h", "-z", "3", "mute", "true"]);
        assert_eq!(args.zone().unwrap(), Zone::Zone3);
        assert_eq!(
            args.command,
            Some(Commands::Mute { state: "true".to_string() })
        );
    }

    #[test]
    fn test_negative_volume_is_passed_through() {
        let args = parse(&["musiccast", "--host", "h", "volume", "-5"]);
        assert_eq!(args.command, Some(Commands::Volume { level: -5 }));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = parse(&["musiccast", "--host", "h", "--interval", "0"]);
        assert!(args.validate().is_err());
    }
}
