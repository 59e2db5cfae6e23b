//! Terminal control panel
//!
//! Shows what the receiver reports for one zone and sends the user's
//! commands back. Polls and commands run on background threads and report
//! to the UI loop over a channel.

pub mod poller;
pub mod state;
pub mod view;

use std::io::{self, Stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use http_client::Transport;
use musiccast_api::{MusicCastClient, Zone};
use ratatui::{backend::CrosstermBackend, Terminal};

use poller::Poller;
use state::PanelState;

/// How long the UI waits for a key before redrawing
const TICK: Duration = Duration::from_millis(100);

/// Run the panel until the user quits
pub fn run<T>(client: MusicCastClient<T>, zone: Zone, host: &str, interval: Duration) -> Result<()>
where
    T: Transport + Clone + 'static,
{
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, client, zone, host, interval);
    restore_terminal()?;
    result
}

fn event_loop<T>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: MusicCastClient<T>,
    zone: Zone,
    host: &str,
    interval: Duration,
) -> Result<()>
where
    T: Transport + Clone + 'static,
{
    let (events, updates) = mpsc::channel();
    let poller = Poller::spawn(client.clone(), zone, interval, events.clone());
    let mut state = PanelState::new(zone, host);

    tracing::info!(zone = %zone, ?interval, "control panel started");

    while !state.should_quit {
        while let Ok(update) = updates.try_recv() {
            state.apply_event(update);
        }

        terminal.draw(|frame| view::render(frame, &state))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(control) = state.handle_key(key.code) {
                    state.message = None;
                    poller::dispatch(
                        client.clone(),
                        zone,
                        control,
                        events.clone(),
                        poller.refresher(),
                    );
                }
            }
        }
    }

    poller.stop();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
