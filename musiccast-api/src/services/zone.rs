//! Zone operations, addressed as `/{zone}/{command}`
//!
//! Power, volume, input selection and sound shaping of one output group.

use crate::input::Power;
use crate::operation::{ValidationError, Value};
use crate::types::Status;
use crate::{define_operation, define_toggle_operations};

// =============================================================================
// POWER AND VOLUME
// =============================================================================

define_operation! {
    operation: SetPowerOperation,
    command: "setPower",
    service: Zone,
    request: { power: Power },
    query: |req| { "power" => req.power },
    response: Value,
}

define_operation! {
    operation: SetSleepOperation,
    command: "setSleep",
    service: Zone,
    request: { sleep: u32 },
    query: |req| { "sleep" => req.sleep },
    validate: |req| {
        if crate::input::SLEEP_STEPS.contains(&req.sleep) {
            Ok(())
        } else {
            Err(ValidationError::invalid_value("sleep", req.sleep, "must be 0, 30, 60, 90 or 120"))
        }
    },
    response: Value,
}

// Passed through untouched; the receiver rejects levels above its max_volume.
define_operation! {
    operation: SetVolumeOperation,
    command: "setVolume",
    service: Zone,
    request: { volume: i32 },
    query: |req| { "volume" => req.volume },
    response: Value,
}

define_operation! {
    operation: SetSubwooferVolumeOperation,
    command: "setSubwooferVolume",
    service: Zone,
    request: { volume: i32 },
    query: |req| { "volume" => req.volume },
    response: Value,
}

// =============================================================================
// INPUT AND SOUND PROGRAM
// =============================================================================

define_operation! {
    operation: SetInputOperation,
    command: "setInput",
    service: Zone,
    request: { input: String, mode: Option<String> },
    query: |req| { "input" => req.input, "mode" => req.mode },
    response: Value,
}

define_operation! {
    operation: SetSoundProgramOperation,
    command: "setSoundProgram",
    service: Zone,
    request: { program: String },
    query: |req| { "program" => req.program },
    response: Value,
}

define_toggle_operations! {
    service: Zone, param: "enable";
    SetMuteOperation => "setMute",
    Set3dSurroundOperation => "set3dSurround",
    SetDirectOperation => "setDirect",
    SetPureDirectOperation => "setPureDirect",
    SetEnhancerOperation => "setEnhancer",
    SetClearVoiceOperation => "setClearVoice",
    SetBassExtensionOperation => "setBassExtension",
}

// =============================================================================
// TONE, EQUALIZER AND BALANCE
// =============================================================================

define_operation! {
    operation: SetToneControlOperation,
    command: "setToneControl",
    service: Zone,
    request: { bass: Option<i32>, treble: Option<i32> },
    query: |req| { "mode" => "manual", "bass" => req.bass, "treble" => req.treble },
    validate: |req| {
        if req.bass.is_none() && req.treble.is_none() {
            Err(ValidationError::missing("bass or treble"))
        } else {
            Ok(())
        }
    },
    response: Value,
}

define_operation! {
    operation: SetEqualizerOperation,
    command: "setEqualizer",
    service: Zone,
    request: { low: i32, mid: i32, high: i32 },
    query: |req| { "mode" => "manual", "low" => req.low, "mid" => req.mid, "high" => req.high },
    response: Value,
}

define_operation! {
    operation: SetBalanceOperation,
    command: "setBalance",
    service: Zone,
    request: { value: i32 },
    query: |req| { "value" => req.value },
    response: Value,
}

// =============================================================================
// QUERIES
// =============================================================================

define_operation! {
    operation: GetStatusOperation,
    command: "getStatus",
    service: Zone,
    request: {},
    query: |req| {},
    response: Status,
}

define_operation! {
    operation: GetSignalInfoOperation,
    command: "getSignalInfo",
    service: Zone,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetSoundProgramListOperation,
    command: "getSoundProgramList",
    service: Zone,
    request: {},
    query: |req| {},
    response: Value,
}

// =============================================================================
// LINK
// =============================================================================

define_operation! {
    operation: SetLinkControlOperation,
    command: "setLinkControl",
    service: Zone,
    request: { control: String },
    query: |req| { "control" => req.control },
    response: Value,
}

define_operation! {
    operation: SetLinkAudioDelayOperation,
    command: "setLinkAudioDelay",
    service: Zone,
    request: { delay: String },
    query: |req| { "delay" => req.delay },
    response: Value,
}

define_operation! {
    operation: SetLinkAudioQualityOperation,
    command: "setLinkAudioQuality",
    service: Zone,
    request: { mode: String },
    query: |req| { "mode" => req.mode },
    response: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::MusicCastOperation;
    use crate::Zone;

    #[test]
    fn test_power_command() {
        let command = SetPowerOperation::build_command(&SetPowerOperationRequest {
            zone: Zone::Zone2,
            power: Power::Standby,
        })
        .unwrap();
        assert_eq!(command.uri(), "/zone2/setPower?power=standby");
    }

    #[test]
    fn test_toggle_table_shares_parameter() {
        let request = Set3dSurroundOperationRequest { zone: Zone::Main, enabled: true };
        assert_eq!(
            Set3dSurroundOperation::build_command(&request).unwrap().uri(),
            "/main/set3dSurround?enable=true"
        );

        let request = SetBassExtensionOperationRequest { zone: Zone::Zone4, enabled: false };
        assert_eq!(
            SetBassExtensionOperation::build_command(&request).unwrap().uri(),
            "/zone4/setBassExtension?enable=false"
        );
    }

    #[test]
    fn test_tone_control_sends_only_given_band() {
        let command = SetToneControlOperation::build_command(&SetToneControlOperationRequest {
            zone: Zone::Main,
            bass: None,
            treble: Some(-4),
        })
        .unwrap();
        assert_eq!(command.uri(), "/main/setToneControl?mode=manual&treble=-4");
    }

    #[test]
    fn test_tone_control_requires_a_band() {
        let result = SetToneControlOperation::build_command(&SetToneControlOperationRequest {
            zone: Zone::Main,
            bass: None,
            treble: None,
        });
        assert!(matches!(result, Err(ValidationError::MissingParameter { .. })));
    }

    #[test]
    fn test_equalizer_parameter_order() {
        let command = SetEqualizerOperation::build_command(&SetEqualizerOperationRequest {
            zone: Zone::Zone3,
            low: -2,
            mid: 0,
            high: 5,
        })
        .unwrap();
        assert_eq!(command.uri(), "/zone3/setEqualizer?mode=manual&low=-2&mid=0&high=5");
    }

    #[test]
    fn test_sleep_rejects_unquantized_values() {
        let result =
            SetSleepOperation::build_command(&SetSleepOperationRequest { zone: Zone::Main, sleep: 45 });
        assert!(result.is_err());
    }

    #[test]
    fn test_link_audio_quality_uses_mode() {
        let command =
            SetLinkAudioQualityOperation::build_command(&SetLinkAudioQualityOperationRequest {
                zone: Zone::Main,
                mode: "compressed".to_string(),
            })
            .unwrap();
        assert_eq!(command.uri(), "/main/setLinkAudioQuality?mode=compressed");
    }

    #[test]
    fn test_input_without_mode() {
        let command = SetInputOperation::build_command(&SetInputOperationRequest {
            zone: Zone::Main,
            input: "net_radio".to_string(),
            mode: None,
        })
        .unwrap();
        assert_eq!(command.uri(), "/main/setInput?input=net_radio");
    }
}
