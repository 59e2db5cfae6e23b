//! Typed snapshots of the two responses the control panel reads
//!
//! Devices vary in which fields they send, so every field defaults and
//! unknown enum tokens decode to `Unknown` rather than failing.

use serde::{Deserialize, Serialize};

/// Power state as reported by `getStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    On,
    Standby,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PowerState {
    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Equalizer {
    pub mode: String,
    pub low: i32,
    pub mid: i32,
    pub high: i32,
}

/// Zone status from `/{zone}/getStatus`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub response_code: i32,
    pub power: PowerState,
    pub sleep: u32,
    pub volume: u32,
    pub mute: bool,
    pub max_volume: u32,
    pub input: String,
    pub distribution_enable: bool,
    pub equalizer: Equalizer,
    pub link_control: String,
    pub link_audio_quality: String,
    pub disable_flags: u32,
}

/// Transport state of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Play,
    Stop,
    Pause,
    FastReverse,
    FastForward,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Play)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    Off,
    One,
    All,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    Off,
    On,
    Songs,
    Album,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Current track of a source from `/{source}/getPlayInfo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayInfo {
    pub response_code: i32,
    pub input: String,
    pub play_queue_type: String,
    pub playback: PlaybackState,
    pub repeat: RepeatMode,
    pub shuffle: ShuffleMode,
    /// Seconds
    pub play_time: i64,
    pub total_time: i64,
    pub artist: String,
    pub album: String,
    pub track: String,
    /// Path on the receiver, e.g. `/YamahaRemoteControl/AlbumART/AlbumART1234.jpg`
    pub albumart_url: String,
    pub albumart_id: i64,
    pub usb_devicetype: String,
    pub auto_stopped: bool,
    pub attribute: u64,
    pub repeat_available: Vec<RepeatMode>,
    pub shuffle_available: Vec<ShuffleMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_decodes_device_payload() {
        let payload = json!({
            "response_code": 0,
            "power": "on",
            "sleep": 0,
            "volume": 42,
            "mute": false,
            "max_volume": 161,
            "input": "spotify",
            "distribution_enable": true,
            "equalizer": { "mode": "manual", "low": -2, "mid": 0, "high": 3 },
            "link_control": "standard",
            "link_audio_delay": "audio_sync",
            "link_audio_quality": "uncompressed",
            "disable_flags": 0
        });

        let status: Status = serde_json::from_value(payload).unwrap();
        assert!(status.power.is_on());
        assert_eq!(status.volume, 42);
        assert_eq!(status.max_volume, 161);
        assert_eq!(status.input, "spotify");
        assert_eq!(status.equalizer.low, -2);
        assert_eq!(status.equalizer.high, 3);
    }

    #[test]
    fn test_status_tolerates_sparse_payload() {
        let status: Status =
            serde_json::from_value(json!({ "response_code": 0, "power": "party" })).unwrap();
        assert_eq!(status.power, PowerState::Unknown);
        assert_eq!(status.volume, 0);
        assert_eq!(status.equalizer, Equalizer::default());
    }

    #[test]
    fn test_play_info_decodes_device_payload() {
        let payload = json!({
            "response_code": 0,
            "input": "spotify",
            "play_queue_type": "system",
            "playback": "play",
            "repeat": "off",
            "shuffle": "on",
            "play_time": 73,
            "total_time": 215,
            "artist": "Nils Frahm",
            "album": "Spaces",
            "track": "Says",
            "albumart_url": "/YamahaRemoteControl/AlbumART/AlbumART7.jpg",
            "albumart_id": 7,
            "usb_devicetype": "unknown",
            "auto_stopped": false,
            "attribute": 33554431,
            "repeat_available": ["off", "one", "all"],
            "shuffle_available": ["off", "on"]
        });

        let info: PlayInfo = serde_json::from_value(payload).unwrap();
        assert!(info.playback.is_playing());
        assert_eq!(info.shuffle, ShuffleMode::On);
        assert_eq!(info.play_time, 73);
        assert_eq!(info.track, "Says");
        assert_eq!(info.repeat_available, vec![RepeatMode::Off, RepeatMode::One, RepeatMode::All]);
    }

    #[test]
    fn test_play_info_unknown_tokens() {
        let info: PlayInfo =
            serde_json::from_value(json!({ "playback": "buffering", "repeat": "shuffle_all" }))
                .unwrap();
        assert_eq!(info.playback, PlaybackState::Unknown);
        assert_eq!(info.repeat, RepeatMode::Unknown);
        assert!(info.artist.is_empty());
    }
}
