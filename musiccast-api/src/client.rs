use http_client::{HttpClient, Transport, TransportConfig};
use serde_json::Value;

use crate::input::{quantize_sleep, BoolLike, Playback, Power};
use crate::operation::{Method, MusicCastOperation};
use crate::services::zone as zone_ops;
use crate::services::{cd, clock, distribution, netusb, playback, system, tuner};
use crate::types::{PlayInfo, Status};
use crate::{ApiError, Result, Source, Zone, ZoneSelector};

/// A client for one MusicCast receiver
///
/// Each method normalizes its loosely typed arguments, builds the
/// matching [`Command`](crate::operation::Command) and sends it through
/// the transport. Nothing is cached; every call is one HTTP exchange.
///
/// Zone arguments accept anything that converts into a [`ZoneSelector`]:
/// `None`, a 1-based index, a numeral, a token like `"zone2"` or a
/// [`Zone`]. Boolean arguments accept anything that converts into a
/// [`BoolLike`].
///
/// ```rust,ignore
/// use http_client::TransportConfig;
/// use musiccast_api::MusicCastClient;
///
/// let client = MusicCastClient::new(TransportConfig::direct("192.168.0.31"));
/// client.set_volume_to(30, "main")?;
/// client.mute(true, 2)?;
/// let status = client.get_status(None::<&str>)?;
/// ```
#[derive(Debug, Clone)]
pub struct MusicCastClient<T: Transport = HttpClient> {
    transport: T,
}

impl MusicCastClient<HttpClient> {
    /// Create a client talking HTTP with the given configuration
    pub fn new(config: TransportConfig) -> Self {
        Self::with_transport(HttpClient::new(config))
    }
}

impl<T: Transport> MusicCastClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute an operation against the receiver
    ///
    /// Validation failures are returned before anything is sent. Transport
    /// errors pass through unchanged; a body that does not decode into
    /// `Op::Response` is a [`ApiError::ParseError`].
    pub fn execute<Op: MusicCastOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let command = Op::build_command(request)?;
        let uri = command.uri();

        let body = match command.method {
            Method::Get => self.transport.get(&uri)?,
            Method::Post => {
                let payload = command.body.unwrap_or(Value::Null);
                self.transport.post(&uri, &payload)?
            }
        };

        serde_json::from_value(body).map_err(|e| {
            tracing::debug!(command = %uri, error = %e, "unexpected response shape");
            ApiError::ParseError(e.to_string())
        })
    }

    // =========================================================================
    // ZONE: POWER AND VOLUME
    // =========================================================================

    /// `"on"` or a truthy value powers on; anything else puts the zone in standby
    pub fn power<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetPowerOperation>(&zone_ops::SetPowerOperationRequest {
            zone: Zone::resolve(zone)?,
            power: Power::from_input(on),
        })
    }

    pub fn power_on<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.power(true, zone)
    }

    pub fn power_off<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.power(false, zone)
    }

    /// Set the sleep timer; minutes are rounded down to 0, 30, 60, 90 or 120
    pub fn sleep<'a>(&self, minutes: u32, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::SetSleepOperation>(&zone_ops::SetSleepOperationRequest {
            zone: Zone::resolve(zone)?,
            sleep: quantize_sleep(minutes),
        })
    }

    /// Set the volume level; the receiver decides what range is valid
    pub fn set_volume_to<'a>(&self, level: i32, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::SetVolumeOperation>(&zone_ops::SetVolumeOperationRequest {
            zone: Zone::resolve(zone)?,
            volume: level,
        })
    }

    pub fn mute<'a>(
        &self,
        state: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetMuteOperation>(&zone_ops::SetMuteOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: state.into().is_truthy(),
        })
    }

    pub fn mute_on<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.mute(true, zone)
    }

    pub fn mute_off<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.mute(false, zone)
    }

    pub fn set_subwoofer_volume_to<'a>(
        &self,
        level: i32,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetSubwooferVolumeOperation>(&zone_ops::SetSubwooferVolumeOperationRequest {
            zone: Zone::resolve(zone)?,
            volume: level,
        })
    }

    // =========================================================================
    // ZONE: INPUT AND SOUND
    // =========================================================================

    pub fn set_input<'a>(
        &self,
        input: &str,
        zone: impl Into<ZoneSelector<'a>>,
        mode: Option<&str>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetInputOperation>(&zone_ops::SetInputOperationRequest {
            zone: Zone::resolve(zone)?,
            input: input.to_string(),
            mode: mode.map(str::to_string),
        })
    }

    pub fn set_sound<'a>(&self, program: &str, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::SetSoundProgramOperation>(&zone_ops::SetSoundProgramOperationRequest {
            zone: Zone::resolve(zone)?,
            program: program.to_string(),
        })
    }

    pub fn surround<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::Set3dSurroundOperation>(&zone_ops::Set3dSurroundOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: on.into().is_truthy(),
        })
    }

    pub fn surround_on<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.surround(true, zone)
    }

    pub fn surround_off<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.surround(false, zone)
    }

    pub fn set_direct<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetDirectOperation>(&zone_ops::SetDirectOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: on.into().is_truthy(),
        })
    }

    pub fn set_pure_direct<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetPureDirectOperation>(&zone_ops::SetPureDirectOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: on.into().is_truthy(),
        })
    }

    pub fn set_enhancer<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetEnhancerOperation>(&zone_ops::SetEnhancerOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: on.into().is_truthy(),
        })
    }

    pub fn set_clear_voice<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetClearVoiceOperation>(&zone_ops::SetClearVoiceOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: on.into().is_truthy(),
        })
    }

    pub fn set_bass_extension<'a>(
        &self,
        on: impl Into<BoolLike<'a>>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetBassExtensionOperation>(&zone_ops::SetBassExtensionOperationRequest {
            zone: Zone::resolve(zone)?,
            enabled: on.into().is_truthy(),
        })
    }

    // =========================================================================
    // ZONE: TONE AND BALANCE
    // =========================================================================

    pub fn set_bass_to<'a>(&self, level: i32, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::SetToneControlOperation>(&zone_ops::SetToneControlOperationRequest {
            zone: Zone::resolve(zone)?,
            bass: Some(level),
            treble: None,
        })
    }

    pub fn set_treble_to<'a>(&self, level: i32, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::SetToneControlOperation>(&zone_ops::SetToneControlOperationRequest {
            zone: Zone::resolve(zone)?,
            bass: None,
            treble: Some(level),
        })
    }

    pub fn set_equalizer<'a>(
        &self,
        low: i32,
        mid: i32,
        high: i32,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetEqualizerOperation>(&zone_ops::SetEqualizerOperationRequest {
            zone: Zone::resolve(zone)?,
            low,
            mid,
            high,
        })
    }

    pub fn set_balance<'a>(&self, value: i32, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::SetBalanceOperation>(&zone_ops::SetBalanceOperationRequest {
            zone: Zone::resolve(zone)?,
            value,
        })
    }

    // =========================================================================
    // ZONE: QUERIES AND LINK
    // =========================================================================

    pub fn get_status<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Status> {
        self.execute::<zone_ops::GetStatusOperation>(&zone_ops::GetStatusOperationRequest {
            zone: Zone::resolve(zone)?,
        })
    }

    pub fn get_signal_info<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::GetSignalInfoOperation>(&zone_ops::GetSignalInfoOperationRequest {
            zone: Zone::resolve(zone)?,
        })
    }

    pub fn get_sound_program_list<'a>(&self, zone: impl Into<ZoneSelector<'a>>) -> Result<Value> {
        self.execute::<zone_ops::GetSoundProgramListOperation>(&zone_ops::GetSoundProgramListOperationRequest {
            zone: Zone::resolve(zone)?,
        })
    }

    pub fn set_link_control<'a>(
        &self,
        control: &str,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetLinkControlOperation>(&zone_ops::SetLinkControlOperationRequest {
            zone: Zone::resolve(zone)?,
            control: control.to_string(),
        })
    }

    pub fn set_link_audio_delay<'a>(
        &self,
        delay: &str,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetLinkAudioDelayOperation>(&zone_ops::SetLinkAudioDelayOperationRequest {
            zone: Zone::resolve(zone)?,
            delay: delay.to_string(),
        })
    }

    pub fn set_link_audio_quality<'a>(
        &self,
        mode: &str,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<zone_ops::SetLinkAudioQualityOperation>(
            &zone_ops::SetLinkAudioQualityOperationRequest {
                zone: Zone::resolve(zone)?,
                mode: mode.to_string(),
            },
        )
    }

    // =========================================================================
    // SOURCES: PLAY INFO AND TRANSPORT
    // =========================================================================

    pub fn get_play_info(&self, source: Source) -> Result<PlayInfo> {
        self.execute::<playback::GetPlayInfoOperation>(&playback::GetPlayInfoOperationRequest {
            source,
        })
    }

    /// Send a playback action; unknown actions become `play`
    pub fn set_playback(&self, action: &str, source: Source) -> Result<Value> {
        self.send_playback(Playback::from_input(action), source)
    }

    pub fn send_playback(&self, playback: Playback, source: Source) -> Result<Value> {
        self.execute::<playback::SetPlaybackOperation>(&playback::SetPlaybackOperationRequest {
            source,
            playback,
        })
    }

    pub fn toggle_repeat(&self, source: Source) -> Result<Value> {
        self.execute::<playback::ToggleRepeatOperation>(&playback::ToggleRepeatOperationRequest {
            source,
        })
    }

    pub fn toggle_shuffle(&self, source: Source) -> Result<Value> {
        self.execute::<playback::ToggleShuffleOperation>(&playback::ToggleShuffleOperationRequest {
            source,
        })
    }

    // =========================================================================
    // NETUSB
    // =========================================================================

    pub fn get_preset_info(&self) -> Result<Value> {
        self.execute::<netusb::GetPresetInfoOperation>(&netusb::GetPresetInfoOperationRequest {})
    }

    pub fn get_settings(&self) -> Result<Value> {
        self.execute::<netusb::GetSettingsOperation>(&netusb::GetSettingsOperationRequest {})
    }

    pub fn get_recent_info(&self) -> Result<Value> {
        self.execute::<netusb::GetRecentInfoOperation>(&netusb::GetRecentInfoOperationRequest {})
    }

    pub fn clear_recent_info(&self) -> Result<Value> {
        self.execute::<netusb::ClearRecentInfoOperation>(&netusb::ClearRecentInfoOperationRequest {})
    }

    pub fn set_net_playback(&self, action: &str) -> Result<Value> {
        self.set_playback(action, Source::NetUsb)
    }

    pub fn play_net(&self) -> Result<Value> {
        self.send_playback(Playback::Play, Source::NetUsb)
    }

    pub fn pause_net(&self) -> Result<Value> {
        self.send_playback(Playback::Pause, Source::NetUsb)
    }

    pub fn stop_net(&self) -> Result<Value> {
        self.send_playback(Playback::Stop, Source::NetUsb)
    }

    pub fn next_net(&self) -> Result<Value> {
        self.send_playback(Playback::Next, Source::NetUsb)
    }

    pub fn prev_net(&self) -> Result<Value> {
        self.send_playback(Playback::Previous, Source::NetUsb)
    }

    /// Start (truthy) or stop fast reverse
    pub fn frw_net<'a>(&self, state: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.send_playback(Playback::fast_reverse(state.into().is_truthy()), Source::NetUsb)
    }

    /// Start (truthy) or stop fast forward
    pub fn ffw_net<'a>(&self, state: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.send_playback(Playback::fast_forward(state.into().is_truthy()), Source::NetUsb)
    }

    pub fn toggle_net_repeat(&self) -> Result<Value> {
        self.toggle_repeat(Source::NetUsb)
    }

    pub fn toggle_net_shuffle(&self) -> Result<Value> {
        self.toggle_shuffle(Source::NetUsb)
    }

    /// Store the current track in preset slot `num` (1..=40)
    pub fn store_preset(&self, num: u32) -> Result<Value> {
        self.execute::<netusb::StorePresetOperation>(&netusb::StorePresetOperationRequest { num })
    }

    /// Clear preset slot `num` (1..=40)
    pub fn clear_preset(&self, num: u32) -> Result<Value> {
        self.execute::<netusb::ClearPresetOperation>(&netusb::ClearPresetOperationRequest { num })
    }

    /// Recall a preset into a zone; slot 1 when `num` is `None`
    pub fn recall_preset<'a>(
        &self,
        num: Option<u32>,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<netusb::RecallPresetOperation>(&netusb::RecallPresetOperationRequest {
            zone: Zone::resolve(zone)?,
            num: num.unwrap_or(1),
        })
    }

    /// Browse a list; `size` defaults to 8 entries
    pub fn get_list_info(
        &self,
        input: &str,
        index: u32,
        size: Option<u32>,
        lang: Option<&str>,
    ) -> Result<Value> {
        self.execute::<netusb::GetListInfoOperation>(&netusb::GetListInfoOperationRequest {
            input: input.to_string(),
            index,
            size: size.unwrap_or(netusb::DEFAULT_LIST_SIZE),
            lang: lang.map(str::to_string),
        })
    }

    pub fn set_list_control(
        &self,
        list_id: &str,
        list_type: &str,
        index: Option<u32>,
        zone: Option<Zone>,
    ) -> Result<Value> {
        self.execute::<netusb::SetListControlOperation>(&netusb::SetListControlOperationRequest {
            list_id: list_id.to_string(),
            list_type: list_type.to_string(),
            index,
            zone,
        })
    }

    pub fn get_mc_playlists(&self) -> Result<Value> {
        self.execute::<netusb::GetMcPlaylistNameOperation>(&netusb::GetMcPlaylistNameOperationRequest {})
    }

    pub fn get_mc_playlist_content(&self, bank: u32, index: u32) -> Result<Value> {
        self.execute::<netusb::GetMcPlaylistOperation>(&netusb::GetMcPlaylistOperationRequest {
            bank,
            index,
        })
    }

    pub fn start_mc_playlist<'a>(
        &self,
        bank: u32,
        index: u32,
        zone: impl Into<ZoneSelector<'a>>,
    ) -> Result<Value> {
        self.execute::<netusb::ManageMcPlaylistOperation>(&netusb::ManageMcPlaylistOperationRequest {
            bank,
            index,
            zone: Zone::resolve(zone)?,
        })
    }

    // =========================================================================
    // CD
    // =========================================================================

    pub fn set_cd_playback(&self, action: &str) -> Result<Value> {
        self.set_playback(action, Source::Cd)
    }

    pub fn play_cd(&self) -> Result<Value> {
        self.send_playback(Playback::Play, Source::Cd)
    }

    pub fn pause_cd(&self) -> Result<Value> {
        self.send_playback(Playback::Pause, Source::Cd)
    }

    pub fn stop_cd(&self) -> Result<Value> {
        self.send_playback(Playback::Stop, Source::Cd)
    }

    pub fn next_cd(&self) -> Result<Value> {
        self.send_playback(Playback::Next, Source::Cd)
    }

    pub fn prev_cd(&self) -> Result<Value> {
        self.send_playback(Playback::Previous, Source::Cd)
    }

    pub fn frw_cd<'a>(&self, state: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.send_playback(Playback::fast_reverse(state.into().is_truthy()), Source::Cd)
    }

    pub fn ffw_cd<'a>(&self, state: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.send_playback(Playback::fast_forward(state.into().is_truthy()), Source::Cd)
    }

    pub fn toggle_tray(&self) -> Result<Value> {
        self.execute::<cd::ToggleTrayOperation>(&cd::ToggleTrayOperationRequest {})
    }

    pub fn toggle_cd_repeat(&self) -> Result<Value> {
        self.toggle_repeat(Source::Cd)
    }

    pub fn toggle_cd_shuffle(&self) -> Result<Value> {
        self.toggle_shuffle(Source::Cd)
    }

    // =========================================================================
    // TUNER
    // =========================================================================

    pub fn get_tuner_preset_info(&self, band: &str) -> Result<Value> {
        self.execute::<tuner::GetPresetInfoOperation>(&tuner::GetPresetInfoOperationRequest {
            band: band.to_string(),
        })
    }

    pub fn get_tuner_play_info(&self) -> Result<Value> {
        self.execute::<tuner::GetPlayInfoOperation>(&tuner::GetPlayInfoOperationRequest {})
    }

    pub fn set_band(&self, band: &str) -> Result<Value> {
        self.execute::<tuner::SetBandOperation>(&tuner::SetBandOperationRequest {
            band: band.to_string(),
        })
    }

    /// Tune directly to `freq` (kHz) on `band`
    pub fn set_freq_direct(&self, band: &str, freq: u32) -> Result<Value> {
        self.execute::<tuner::SetFreqOperation>(&tuner::SetFreqOperationRequest {
            band: band.to_string(),
            num: freq,
        })
    }

    pub fn switch_preset_tuner(&self, dir: &str) -> Result<Value> {
        self.execute::<tuner::SwitchPresetOperation>(&tuner::SwitchPresetOperationRequest {
            dir: dir.to_string(),
        })
    }

    pub fn set_dab_service(&self, dir: &str) -> Result<Value> {
        self.execute::<tuner::SetDabServiceOperation>(&tuner::SetDabServiceOperationRequest {
            dir: dir.to_string(),
        })
    }

    // =========================================================================
    // SYSTEM
    // =========================================================================

    pub fn get_device_info(&self) -> Result<Value> {
        self.execute::<system::GetDeviceInfoOperation>(&system::GetDeviceInfoOperationRequest {})
    }

    pub fn get_features(&self) -> Result<Value> {
        self.execute::<system::GetFeaturesOperation>(&system::GetFeaturesOperationRequest {})
    }

    pub fn get_network_status(&self) -> Result<Value> {
        self.execute::<system::GetNetworkStatusOperation>(&system::GetNetworkStatusOperationRequest {})
    }

    pub fn get_func_status(&self) -> Result<Value> {
        self.execute::<system::GetFuncStatusOperation>(&system::GetFuncStatusOperationRequest {})
    }

    /// Names of inputs and zones; all of them when `id` is `None`
    pub fn get_name_text(&self, id: Option<&str>) -> Result<Value> {
        self.execute::<system::GetNameTextOperation>(&system::GetNameTextOperationRequest {
            id: id.map(str::to_string),
        })
    }

    pub fn get_location_info(&self) -> Result<Value> {
        self.execute::<system::GetLocationInfoOperation>(&system::GetLocationInfoOperationRequest {})
    }

    pub fn set_auto_power_standby<'a>(&self, on: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.execute::<system::SetAutoPowerStandbyOperation>(
            &system::SetAutoPowerStandbyOperationRequest {
                enabled: on.into().is_truthy(),
            },
        )
    }

    pub fn set_hdmi_out1<'a>(&self, on: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.execute::<system::SetHdmiOut1Operation>(&system::SetHdmiOut1OperationRequest {
            enabled: on.into().is_truthy(),
        })
    }

    pub fn set_hdmi_out2<'a>(&self, on: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.execute::<system::SetHdmiOut2Operation>(&system::SetHdmiOut2OperationRequest {
            enabled: on.into().is_truthy(),
        })
    }

    pub fn set_party_mode<'a>(&self, on: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.execute::<system::SetPartyModeOperation>(&system::SetPartyModeOperationRequest {
            enabled: on.into().is_truthy(),
        })
    }

    // =========================================================================
    // CLOCK
    // =========================================================================

    pub fn get_clock_settings(&self) -> Result<Value> {
        self.execute::<clock::GetSettingsOperation>(&clock::GetSettingsOperationRequest {})
    }

    pub fn set_clock_auto_sync<'a>(&self, on: impl Into<BoolLike<'a>>) -> Result<Value> {
        self.execute::<clock::SetAutoSyncOperation>(&clock::SetAutoSyncOperationRequest {
            enabled: on.into().is_truthy(),
        })
    }

    /// `date_time` is `YYMMDDhhmmss`
    pub fn set_clock_date_time(&self, date_time: &str) -> Result<Value> {
        self.execute::<clock::SetDateAndTimeOperation>(&clock::SetDateAndTimeOperationRequest {
            date_time: date_time.to_string(),
        })
    }

    pub fn set_clock_format(&self, format: &str) -> Result<Value> {
        self.execute::<clock::SetClockFormatOperation>(&clock::SetClockFormatOperationRequest {
            format: format.to_string(),
        })
    }

    pub fn set_alarm_settings(&self, settings: Value) -> Result<Value> {
        self.execute::<clock::SetAlarmSettingsOperation>(&clock::SetAlarmSettingsOperationRequest {
            settings,
        })
    }

    // =========================================================================
    // DISTRIBUTION
    // =========================================================================

    pub fn get_distribution_info(&self) -> Result<Value> {
        self.execute::<distribution::GetDistributionInfoOperation>(
            &distribution::GetDistributionInfoOperationRequest {},
        )
    }

    pub fn set_server_info(&self, info: Value) -> Result<Value> {
        self.execute::<distribution::SetServerInfoOperation>(
            &distribution::SetServerInfoOperationRequest { info },
        )
    }

    pub fn set_client_info(&self, info: Value) -> Result<Value> {
        self.execute::<distribution::SetClientInfoOperation>(
            &distribution::SetClientInfoOperationRequest { info },
        )
    }

    pub fn start_distribution(&self, num: u32) -> Result<Value> {
        self.execute::<distribution::StartDistributionOperation>(
            &distribution::StartDistributionOperationRequest { num },
        )
    }

    pub fn stop_distribution(&self) -> Result<Value> {
        self.execute::<distribution::StopDistributionOperation>(
            &distribution::StopDistributionOperationRequest {},
        )
    }

    pub fn set_group_name(&self, name: &str) -> Result<Value> {
        self.execute::<distribution::SetGroupNameOperation>(
            &distribution::SetGroupNameOperationRequest {
                name: name.to_string(),
            },
        )
    }
}
