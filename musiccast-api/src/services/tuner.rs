//! Tuner operations under `/tuner`

use crate::define_operation;
use crate::operation::Value;

define_operation! {
    operation: GetPresetInfoOperation,
    command: "getPresetInfo",
    service: Tuner,
    request: { band: String },
    query: |req| { "band" => req.band },
    response: Value,
}

// Tuner play info carries band and frequency fields that the shared
// PlayInfo snapshot drops, so it stays untyped.
define_operation! {
    operation: GetPlayInfoOperation,
    command: "getPlayInfo",
    service: Tuner,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: SetBandOperation,
    command: "setBand",
    service: Tuner,
    request: { band: String },
    query: |req| { "band" => req.band },
    response: Value,
}

define_operation! {
    operation: SetFreqOperation,
    command: "setFreq",
    service: Tuner,
    request: { band: String, num: u32 },
    query: |req| { "band" => req.band, "tuning" => "direct", "num" => req.num },
    response: Value,
}

define_operation! {
    operation: SwitchPresetOperation,
    command: "switchPreset",
    service: Tuner,
    request: { dir: String },
    query: |req| { "dir" => req.dir },
    response: Value,
}

define_operation! {
    operation: SetDabServiceOperation,
    command: "setDabService",
    service: Tuner,
    request: { dir: String },
    query: |req| { "dir" => req.dir },
    response: Value,
}
