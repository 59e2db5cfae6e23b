//! Transport control shared by the playback sources, addressed as
//! `/{netusb|cd|tuner}/{command}`

use crate::define_operation;
use crate::input::Playback;
use crate::operation::Value;
use crate::types::PlayInfo;

define_operation! {
    operation: GetPlayInfoOperation,
    command: "getPlayInfo",
    service: Source,
    request: {},
    query: |req| {},
    response: PlayInfo,
}

define_operation! {
    operation: SetPlaybackOperation,
    command: "setPlayback",
    service: Source,
    request: { playback: Playback },
    query: |req| { "playback" => req.playback },
    response: Value,
}

define_operation! {
    operation: ToggleRepeatOperation,
    command: "toggleRepeat",
    service: Source,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: ToggleShuffleOperation,
    command: "toggleShuffle",
    service: Source,
    request: {},
    query: |req| {},
    response: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::MusicCastOperation;
    use crate::Source;
    use rstest::rstest;

    #[rstest]
    #[case(Source::NetUsb, "/netusb/getPlayInfo")]
    #[case(Source::Cd, "/cd/getPlayInfo")]
    #[case(Source::Tuner, "/tuner/getPlayInfo")]
    fn test_play_info_follows_source(#[case] source: Source, #[case] expected: &str) {
        let command = GetPlayInfoOperation::build_command(&GetPlayInfoOperationRequest { source }).unwrap();
        assert_eq!(command.uri(), expected);
    }

    #[test]
    fn test_fast_wind_goes_through_set_playback() {
        let command = SetPlaybackOperation::build_command(&SetPlaybackOperationRequest {
            source: Source::NetUsb,
            playback: Playback::fast_reverse(true),
        })
        .unwrap();
        assert_eq!(command.uri(), "/netusb/setPlayback?playback=fast_reverse_start");
    }
}
