//! Network/USB source operations under `/netusb`
//!
//! Transport control shared with the other sources lives in
//! [`playback`](super::playback); this module holds presets, browsing and
//! MusicCast playlists.

use crate::define_operation;
use crate::operation::{ValidationError, Value};
use crate::Zone;

/// Highest preset slot the receiver offers
pub const MAX_PRESET: u32 = 40;

/// Default page size of `getListInfo`
pub const DEFAULT_LIST_SIZE: u32 = 8;

fn validate_preset(num: u32) -> Result<(), ValidationError> {
    if (1..=MAX_PRESET).contains(&num) {
        Ok(())
    } else {
        Err(ValidationError::range_error("num", 1, MAX_PRESET, num))
    }
}

/// Parse a preset slot given as text, e.g. on the command line
pub fn parse_preset(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing("num"));
    }

    let num = trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::invalid_value("num", input, "preset must be a number"))?;
    validate_preset(num)?;
    Ok(num)
}

// =============================================================================
// INFO
// =============================================================================

define_operation! {
    operation: GetPresetInfoOperation,
    command: "getPresetInfo",
    service: NetUsb,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetSettingsOperation,
    command: "getSettings",
    service: NetUsb,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetRecentInfoOperation,
    command: "getRecentInfo",
    service: NetUsb,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: ClearRecentInfoOperation,
    command: "clearRecentInfo",
    service: NetUsb,
    request: {},
    query: |req| {},
    response: Value,
}

// =============================================================================
// PRESETS
// =============================================================================

define_operation! {
    operation: StorePresetOperation,
    command: "storePreset",
    service: NetUsb,
    request: { num: u32 },
    query: |req| { "num" => req.num },
    validate: |req| validate_preset(req.num),
    response: Value,
}

define_operation! {
    operation: ClearPresetOperation,
    command: "clearPreset",
    service: NetUsb,
    request: { num: u32 },
    query: |req| { "num" => req.num },
    validate: |req| validate_preset(req.num),
    response: Value,
}

define_operation! {
    operation: RecallPresetOperation,
    command: "recallPreset",
    service: NetUsb,
    request: { zone: Zone, num: u32 },
    query: |req| { "zone" => req.zone, "num" => req.num },
    response: Value,
}

// =============================================================================
// LIST BROWSING
// =============================================================================

define_operation! {
    operation: GetListInfoOperation,
    command: "getListInfo",
    service: NetUsb,
    request: { input: String, index: u32, size: u32, lang: Option<String> },
    query: |req| {
        "input" => req.input,
        "index" => req.index,
        "size" => req.size,
        "lang" => req.lang,
    },
    response: Value,
}

define_operation! {
    operation: SetListControlOperation,
    command: "setListControl",
    service: NetUsb,
    request: { list_id: String, list_type: String, index: Option<u32>, zone: Option<Zone> },
    query: |req| {
        "list_id" => req.list_id,
        "type" => req.list_type,
        "index" => req.index,
        "zone" => req.zone,
    },
    response: Value,
}

// =============================================================================
// MUSICCAST PLAYLISTS
// =============================================================================

define_operation! {
    operation: GetMcPlaylistNameOperation,
    command: "getMcPlaylistName",
    service: NetUsb,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetMcPlaylistOperation,
    command: "getMcPlaylist",
    service: NetUsb,
    request: { bank: u32, index: u32 },
    query: |req| { "bank" => req.bank, "index" => req.index },
    response: Value,
}

define_operation! {
    operation: ManageMcPlaylistOperation,
    command: "manageMcPlaylist",
    service: NetUsb,
    request: { bank: u32, index: u32, zone: Zone },
    query: |req| {
        "bank" => req.bank,
        "type" => "play",
        "index" => req.index,
        "zone" => req.zone,
    },
    response: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::MusicCastOperation;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(41)]
    #[case(u32::MAX)]
    fn test_preset_out_of_range(#[case] num: u32) {
        let store = StorePresetOperation::build_command(&StorePresetOperationRequest { num });
        let clear = ClearPresetOperation::build_command(&ClearPresetOperationRequest { num });
        assert!(matches!(store, Err(ValidationError::RangeError { .. })));
        assert!(matches!(clear, Err(ValidationError::RangeError { .. })));
    }

    #[rstest]
    #[case(1)]
    #[case(40)]
    fn test_preset_bounds_accepted(#[case] num: u32) {
        let command = StorePresetOperation::build_command(&StorePresetOperationRequest { num }).unwrap();
        assert_eq!(command.uri(), format!("/netusb/storePreset?num={}", num));
    }

    #[rstest]
    #[case("", false)]
    #[case("abc", false)]
    #[case("4.5", false)]
    #[case("-1", false)]
    #[case("41", false)]
    #[case(" 7 ", true)]
    #[case("40", true)]
    fn test_parse_preset(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(parse_preset(input).is_ok(), accepted);
    }

    #[test]
    fn test_recall_preset_carries_zone() {
        let command = RecallPresetOperation::build_command(&RecallPresetOperationRequest {
            zone: Zone::Zone2,
            num: 3,
        })
        .unwrap();
        assert_eq!(command.uri(), "/netusb/recallPreset?zone=zone2&num=3");
    }

    #[test]
    fn test_list_info_omits_missing_lang() {
        let command = GetListInfoOperation::build_command(&GetListInfoOperationRequest {
            input: "server".to_string(),
            index: 0,
            size: DEFAULT_LIST_SIZE,
            lang: None,
        })
        .unwrap();
        assert_eq!(command.uri(), "/netusb/getListInfo?input=server&index=0&size=8");
    }

    #[test]
    fn test_list_control_renames_type() {
        let command = SetListControlOperation::build_command(&SetListControlOperationRequest {
            list_id: "main".to_string(),
            list_type: "select".to_string(),
            index: Some(2),
            zone: None,
        })
        .unwrap();
        assert_eq!(command.uri(), "/netusb/setListControl?list_id=main&type=select&index=2");
    }

    #[test]
    fn test_manage_playlist_plays() {
        let command = ManageMcPlaylistOperation::build_command(&ManageMcPlaylistOperationRequest {
            bank: 1,
            index: 0,
            zone: Zone::Main,
        })
        .unwrap();
        assert_eq!(
            command.uri(),
            "/netusb/manageMcPlaylist?bank=1&type=play&index=0&zone=main"
        );
    }
}
