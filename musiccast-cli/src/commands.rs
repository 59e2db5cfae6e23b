//! One-shot subcommands; each prints the receiver's JSON answer

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use http_client::Transport;
use musiccast_api::services::netusb::parse_preset;
use musiccast_api::{MusicCastClient, Source, Zone};
use serde_json::Value;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Interactive control panel (default)
    Panel,

    /// Print the zone status
    Status,

    /// Print what a source is playing
    PlayInfo {
        #[arg(value_enum, default_value = "netusb")]
        source: SourceArg,
    },

    /// Power the zone on or put it in standby ("on", "true", "1" power on)
    Power { state: String },

    /// Set the volume level
    Volume {
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },

    /// Mute ("true", "1") or unmute
    Mute { state: String },

    /// Send a playback action (play, pause, stop, next, previous, ffw_start, ...)
    Playback {
        action: String,
        #[arg(long, value_enum, default_value = "netusb")]
        source: SourceArg,
    },

    /// Manage netusb presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// Select an input
    Input {
        input: String,
        #[arg(long)]
        mode: Option<String>,
    },

    /// Set the sleep timer in minutes (rounded down to 0/30/60/90/120)
    Sleep { minutes: u32 },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PresetAction {
    /// Store the current track in a slot (1-40)
    Store { num: String },
    /// Clear a slot (1-40)
    Clear { num: String },
    /// Recall a slot into the zone; slot 1 when omitted
    Recall { num: Option<u32> },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    Netusb,
    Cd,
    Tuner,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Netusb => Source::NetUsb,
            SourceArg::Cd => Source::Cd,
            SourceArg::Tuner => Source::Tuner,
        }
    }
}

/// Run a one-shot command and return the body to print
pub fn execute<T: Transport>(
    client: &MusicCastClient<T>,
    zone: Zone,
    command: &Commands,
) -> Result<Value> {
    let body = match command {
        Commands::Panel => anyhow::bail!("the panel is not a one-shot command"),
        Commands::Status => {
            let status = client.get_status(zone).context("failed to read zone status")?;
            serde_json::to_value(status)?
        }
        Commands::PlayInfo { source } => {
            let info = client
                .get_play_info((*source).into())
                .context("failed to read play info")?;
            serde_json::to_value(info)?
        }
        Commands::Power { state } => client.power(state.as_str(), zone)?,
        Commands::Volume { level } => client.set_volume_to(*level, zone)?,
        Commands::Mute { state } => client.mute(state.as_str(), zone)?,
        Commands::Playback { action, source } => client.set_playback(action, (*source).into())?,
        Commands::Preset { action } => match action {
            PresetAction::Store { num } => client.store_preset(parse_preset(num)?)?,
            PresetAction::Clear { num } => client.clear_preset(parse_preset(num)?)?,
            PresetAction::Recall { num } => client.recall_preset(*num, zone)?,
        },
        Commands::Input { input, mode } => client.set_input(input, zone, mode.as_deref())?,
        Commands::Sleep { minutes } => client.sleep(*minutes, zone)?,
    };

    Ok(body)
}
