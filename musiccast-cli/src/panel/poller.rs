//! Background status polling and command dispatch
//!
//! The poller thread fetches a [`Snapshot`] every interval, or sooner when
//! asked through its refresh channel. Commands run on their own short-lived
//! threads so a slow receiver never blocks the UI.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use http_client::Transport;
use musiccast_api::{ApiError, MusicCastClient, Source, Zone};

use super::state::{Control, PanelEvent, Snapshot};

/// Delay between a track skip and the refresh that picks up the new track
pub const SKIP_REFRESH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP 200 with a non-zero `response_code`; the body holds no state
    #[error("{command} rejected with response_code {code}")]
    Rejected { command: &'static str, code: i32 },
}

/// Fetch zone status, then netusb play info
pub fn poll_once<T: Transport>(
    client: &MusicCastClient<T>,
    zone: Zone,
) -> Result<Snapshot, PollError> {
    let status = client.get_status(zone)?;
    if status.response_code != 0 {
        return Err(PollError::Rejected {
            command: "getStatus",
            code: status.response_code,
        });
    }

    let play_info = client.get_play_info(Source::NetUsb)?;
    if play_info.response_code != 0 {
        return Err(PollError::Rejected {
            command: "getPlayInfo",
            code: play_info.response_code,
        });
    }

    Ok(Snapshot { status, play_info })
}

/// Handle to the polling thread
pub struct Poller {
    refresh: Sender<()>,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Start polling right away and then every `interval`
    pub fn spawn<T>(
        client: MusicCastClient<T>,
        zone: Zone,
        interval: Duration,
        events: Sender<PanelEvent>,
    ) -> Self
    where
        T: Transport + 'static,
    {
        let (refresh, requests) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            match poll_once(&client, zone) {
                Ok(snapshot) => {
                    tracing::debug!(zone = %zone, "status poll succeeded");
                    if events.send(PanelEvent::Snapshot(Box::new(snapshot))).is_err() {
                        break;
                    }
                }
                // The panel keeps showing the last known state
                Err(e) => tracing::warn!(zone = %zone, error = %e, "status poll failed"),
            }

            match requests.recv_timeout(interval) {
                Ok(()) | Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self { refresh, handle }
    }

    /// A sender that triggers an immediate poll
    pub fn refresher(&self) -> Sender<()> {
        self.refresh.clone()
    }

    /// Stop polling; waits for an in-flight poll to finish
    pub fn stop(self) {
        drop(self.refresh);
        if self.handle.join().is_err() {
            tracing::warn!("poller thread panicked");
        }
    }
}

/// Send one control command to the receiver
pub fn send_control<T: Transport>(
    client: &MusicCastClient<T>,
    zone: Zone,
    control: Control,
) -> musiccast_api::Result<()> {
    match control {
        Control::Power(on) => client.power(on, zone)?,
        Control::Mute(on) => client.mute(on, zone)?,
        Control::Volume(level) => client.set_volume_to(level as i32, zone)?,
        Control::Play => client.play_net()?,
        Control::Pause => client.pause_net()?,
        Control::Next => client.next_net()?,
        Control::Previous => client.prev_net()?,
        Control::Refresh => return Ok(()),
    };
    Ok(())
}

/// Run a command on its own thread and report the outcome
///
/// Track skips schedule a refresh shortly after they succeed.
pub fn dispatch<T>(
    client: MusicCastClient<T>,
    zone: Zone,
    control: Control,
    events: Sender<PanelEvent>,
    refresh: Sender<()>,
) where
    T: Transport + 'static,
{
    if control == Control::Refresh {
        let _ = refresh.send(());
        return;
    }

    thread::spawn(move || match send_control(&client, zone, control) {
        Ok(()) => {
            tracing::debug!(?control, "command accepted");
            let _ = events.send(PanelEvent::Applied(control));
            if matches!(control, Control::Next | Control::Previous) {
                thread::sleep(SKIP_REFRESH_DELAY);
                let _ = refresh.send(());
            }
        }
        Err(e) => {
            tracing::warn!(?control, error = %e, "command failed");
            let _ = events.send(PanelEvent::Failed(control, e.to_string()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_client::HttpError;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Answers every GET with a canned body and records the command
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        commands: Arc<Mutex<Vec<String>>>,
        fail: bool,
        response_code: i32,
    }

    impl ScriptedTransport {
        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn get(&self, command: &str) -> Result<Value, HttpError> {
            self.commands.lock().unwrap().push(command.to_string());
            if self.fail {
                return Err(HttpError::Network("timed out".to_string()));
            }
            Ok(json!({
                "response_code": self.response_code,
                "power": "on",
                "volume": 25,
                "max_volume": 100,
                "playback": "play",
                "artist": "Stereolab"
            }))
        }

        fn post(&self, command: &str, _body: &Value) -> Result<Value, HttpError> {
            self.get(command)
        }
    }

    #[test]
    fn test_poll_order() {
        let transport = ScriptedTransport::default();
        let client = MusicCastClient::with_transport(transport.clone());

        let snapshot = poll_once(&client, Zone::Zone2).unwrap();

        assert_eq!(snapshot.status.volume, 25);
        assert_eq!(snapshot.play_info.artist, "Stereolab");
        assert_eq!(transport.commands(), vec!["/zone2/getStatus", "/netusb/getPlayInfo"]);
    }

    #[test]
    fn test_failed_poll_sends_nothing() {
        let transport = ScriptedTransport {
            fail: true,
            ..ScriptedTransport::default()
        };
        let client = MusicCastClient::with_transport(transport.clone());
        let (events, received) = mpsc::channel();

        let poller = Poller::spawn(client, Zone::Main, Duration::from_secs(60), events);
        poller.refresher().send(()).unwrap();
        thread::sleep(Duration::from_millis(100));
        poller.stop();

        assert!(received.try_recv().is_err());
        // Status failed, so play info was never requested
        assert!(transport.commands().iter().all(|c| c == "/main/getStatus"));
        assert!(!transport.commands().is_empty());
    }

    #[test]
    fn test_rejected_status_is_a_failed_poll() {
        let transport = ScriptedTransport {
            response_code: 5,
            ..ScriptedTransport::default()
        };
        let client = MusicCastClient::with_transport(transport.clone());

        match poll_once(&client, Zone::Main) {
            Err(PollError::Rejected { command, code }) => {
                assert_eq!(command, "getStatus");
                assert_eq!(code, 5);
            }
            other => panic!("expected a rejected poll, got {:?}", other.map(|_| ())),
        }
        assert_eq!(transport.commands(), vec!["/main/getStatus"]);

        let (events, received) = mpsc::channel();
        let poller = Poller::spawn(client, Zone::Main, Duration::from_secs(60), events);
        thread::sleep(Duration::from_millis(100));
        poller.stop();

        // The panel keeps its last-known state
        assert!(received.try_recv().is_err());
    }

    #[test]
    fn test_poller_delivers_snapshots_on_refresh() {
        let transport = ScriptedTransport::default();
        let client = MusicCastClient::with_transport(transport);
        let (events, received) = mpsc::channel();

        let poller = Poller::spawn(client, Zone::Main, Duration::from_secs(60), events);
        let first = received.recv_timeout(Duration::from_secs(2)).unwrap();
        poller.refresher().send(()).unwrap();
        let second = received.recv_timeout(Duration::from_secs(2)).unwrap();
        poller.stop();

        assert!(matches!(first, PanelEvent::Snapshot(_)));
        assert!(matches!(second, PanelEvent::Snapshot(_)));
    }

    #[test]
    fn test_send_control_commands() {
        let transport = ScriptedTransport::default();
        let client = MusicCastClient::with_transport(transport.clone());

        send_control(&client, Zone::Main, Control::Volume(30)).unwrap();
        send_control(&client, Zone::Zone2, Control::Mute(true)).unwrap();
        send_control(&client, Zone::Main, Control::Power(false)).unwrap();
        send_control(&client, Zone::Main, Control::Pause).unwrap();
        send_control(&client, Zone::Main, Control::Refresh).unwrap();

        assert_eq!(
            transport.commands(),
            vec![
                "/main/setVolume?volume=30",
                "/zone2/setMute?enable=true",
                "/main/setPower?power=standby",
                "/netusb/setPlayback?playback=pause",
            ]
        );
    }

    #[test]
    fn test_skip_triggers_refresh() {
        let transport = ScriptedTransport::default();
        let client = MusicCastClient::with_transport(transport);
        let (events, received) = mpsc::channel();
        let (refresh, refreshed) = mpsc::channel();

        dispatch(client, Zone::Main, Control::Next, events, refresh);

        let applied = received.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(applied, PanelEvent::Applied(Control::Next)));
        refreshed
            .recv_timeout(SKIP_REFRESH_DELAY + Duration::from_secs(2))
            .unwrap();
    }

    #[test]
    fn test_dispatch_reports_failure() {
        let transport = ScriptedTransport {
            fail: true,
            ..ScriptedTransport::default()
        };
        let client = MusicCastClient::with_transport(transport);
        let (events, received) = mpsc::channel();
        let (refresh, _refreshed) = mpsc::channel();

        dispatch(client, Zone::Main, Control::Play, events, refresh);

        match received.recv_timeout(Duration::from_secs(2)).unwrap() {
            PanelEvent::Failed(Control::Play, message) => assert!(message.contains("timed out")),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
