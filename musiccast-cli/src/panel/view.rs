//! Rendering of the control panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use musiccast_api::{RepeatMode, ShuffleMode};

use super::state::PanelState;

const HELP: &str = "p power  m mute  +/- volume  space play/pause  </> prev/next  r refresh  q quit";

pub fn render(frame: &mut Frame, state: &PanelState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Now playing
            Constraint::Length(3), // Volume
            Constraint::Length(3), // Transport
            Constraint::Min(3),    // Help / status
        ])
        .split(frame.size());

    render_header(frame, chunks[0], state);
    render_now_playing(frame, chunks[1], state);
    render_volume(frame, chunks[2], state);
    render_transport(frame, chunks[3], state);
    render_help(frame, chunks[4], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &PanelState) {
    let (power_text, power_color) = if state.power {
        ("ON", Color::Green)
    } else {
        ("STANDBY", Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(
            "MusicCast Controller",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {} @ {}  ", state.zone, state.host)),
        Span::styled(power_text, Style::default().fg(power_color).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  input: {}", capitalize(&state.input))),
    ]);

    frame.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
}

fn render_now_playing(frame: &mut Frame, area: Rect, state: &PanelState) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} - {}", state.artist, state.album),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(state.track.clone()),
        Line::from(""),
        Line::from(Span::styled(
            state.album_art.clone().unwrap_or_else(|| "no album art".to_string()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().title("Now playing").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_volume(frame: &mut Frame, area: Rect, state: &PanelState) {
    let (label, color) = if state.mute {
        (format!("{} / {} (muted)", state.volume, state.max_volume), Color::DarkGray)
    } else {
        (format!("{} / {}", state.volume, state.max_volume), Color::Green)
    };

    let gauge = Gauge::default()
        .block(Block::default().title("Volume").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(volume_ratio(state.volume, state.max_volume))
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_transport(frame: &mut Frame, area: Rect, state: &PanelState) {
    let playback = if state.playing { "Playing" } else { "Paused" };
    let text = format!(
        "{}  {} / {}  repeat: {}  shuffle: {}",
        playback,
        format_time(state.play_time),
        format_time(state.total_time),
        repeat_label(state.repeat),
        shuffle_label(state.shuffle),
    );

    let block = Block::default().title("Playback").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect, state: &PanelState) {
    let status = match (&state.message, state.last_update) {
        (Some(message), _) => message.clone(),
        (None, Some(at)) => format!("updated {}s ago", at.elapsed().as_secs()),
        (None, None) => "waiting for receiver...".to_string(),
    };

    let help = Paragraph::new(vec![Line::from(HELP), Line::from(status)])
        .block(Block::default().title("Controls").borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

fn volume_ratio(volume: u32, max_volume: u32) -> f64 {
    if max_volume == 0 {
        0.0
    } else {
        (volume as f64 / max_volume as f64).clamp(0.0, 1.0)
    }
}

/// `m:ss`, or `--:--` when the source reports nothing
fn format_time(seconds: i64) -> String {
    if seconds <= 0 {
        return "--:--".to_string();
    }
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn repeat_label(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "off",
        RepeatMode::One => "one",
        RepeatMode::All => "all",
        RepeatMode::Unknown => "-",
    }
}

fn shuffle_label(mode: ShuffleMode) -> &'static str {
    match mode {
        ShuffleMode::Off => "off",
        ShuffleMode::On => "on",
        ShuffleMode::Songs => "songs",
        ShuffleMode::Album => "album",
        ShuffleMode::Unknown => "-",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
