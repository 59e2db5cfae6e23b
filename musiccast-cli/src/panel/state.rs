//! What the control panel shows, and how keys and poll results change it

use std::time::Instant;

use crossterm::event::KeyCode;
use musiccast_api::{PlayInfo, RepeatMode, ShuffleMode, Status, Zone};

/// Volume change per `+` / `-` press
pub const VOLUME_STEP: u32 = 1;

/// One poll result: zone status plus the netusb track
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub status: Status,
    pub play_info: PlayInfo,
}

/// A command the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Power(bool),
    Mute(bool),
    Volume(u32),
    Play,
    Pause,
    Next,
    Previous,
    Refresh,
}

/// Messages delivered to the UI thread
#[derive(Debug)]
pub enum PanelEvent {
    Snapshot(Box<Snapshot>),
    Applied(Control),
    Failed(Control, String),
}

#[derive(Debug, Clone)]
pub struct PanelState {
    pub zone: Zone,
    pub host: String,
    pub power: bool,
    pub input: String,
    pub artist: String,
    pub album: String,
    pub track: String,
    pub album_art: Option<String>,
    pub playing: bool,
    pub mute: bool,
    pub volume: u32,
    pub max_volume: u32,
    pub repeat: RepeatMode,
    pub shuffle: ShuffleMode,
    pub play_time: i64,
    pub total_time: i64,
    pub last_update: Option<Instant>,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl PanelState {
    pub fn new(zone: Zone, host: impl Into<String>) -> Self {
        Self {
            zone,
            host: host.into(),
            power: false,
            input: "Unknown".to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            track: String::new(),
            album_art: None,
            playing: false,
            mute: false,
            volume: 0,
            max_volume: 100,
            repeat: RepeatMode::Unknown,
            shuffle: ShuffleMode::Unknown,
            play_time: 0,
            total_time: 0,
            last_update: None,
            message: None,
            should_quit: false,
        }
    }

    /// Replace everything the receiver reported
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let Snapshot { status, play_info } = snapshot;

        self.power = status.power.is_on();
        self.input = status.input;
        self.mute = status.mute;
        self.volume = status.volume;
        if status.max_volume > 0 {
            self.max_volume = status.max_volume;
        }

        self.playing = play_info.playback.is_playing();
        self.artist = play_info.artist;
        self.album = play_info.album;
        self.track = play_info.track;
        self.album_art = album_art_url(&self.host, &play_info.albumart_url);
        self.repeat = play_info.repeat;
        self.shuffle = play_info.shuffle;
        self.play_time = play_info.play_time;
        self.total_time = play_info.total_time;

        self.last_update = Some(Instant::now());
    }

    /// Map a key to a command, updating optimistic fields on the way
    ///
    /// Volume and the playing flag change immediately; mute changes once
    /// the receiver has accepted it.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Control> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('p') => Some(Control::Power(!self.power)),
            KeyCode::Char('m') => Some(Control::Mute(!self.mute)),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                // A volume already past the reported max must not drop on `+`
                self.volume = self
                    .volume
                    .saturating_add(VOLUME_STEP)
                    .min(self.max_volume.max(self.volume));
                Some(Control::Volume(self.volume))
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.volume = self.volume.saturating_sub(VOLUME_STEP);
                Some(Control::Volume(self.volume))
            }
            KeyCode::Char(' ') => {
                self.playing = !self.playing;
                Some(if self.playing { Control::Play } else { Control::Pause })
            }
            KeyCode::Char('<') | KeyCode::Char(',') | KeyCode::Left => Some(Control::Previous),
            KeyCode::Char('>') | KeyCode::Char('.') | KeyCode::Right => Some(Control::Next),
            KeyCode::Char('r') => Some(Control::Refresh),
            _ => None,
        }
    }

    pub fn apply_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Snapshot(snapshot) => self.apply_snapshot(*snapshot),
            PanelEvent::Applied(Control::Mute(mute)) => self.mute = mute,
            PanelEvent::Applied(_) => {}
            PanelEvent::Failed(control, error) => {
                self.message = Some(format!("{:?} failed: {}", control, error));
            }
        }
    }
}

/// Album art is reported as a path on the receiver
fn album_art_url(host: &str, path: &str) -> Option<String> {
    if path.is_empty() {
        None
    } else if path.starts_with("http://") || path.starts_with("https://") {
        Some(path.to_string())
    } else {
        Some(format!("http://{}{}", host, path))
    }
}
