//! Device-wide operations under `/system`

use crate::operation::Value;
use crate::{define_operation, define_toggle_operations};

define_operation! {
    operation: GetDeviceInfoOperation,
    command: "getDeviceInfo",
    service: System,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetFeaturesOperation,
    command: "getFeatures",
    service: System,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetNetworkStatusOperation,
    command: "getNetworkStatus",
    service: System,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetFuncStatusOperation,
    command: "getFuncStatus",
    service: System,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: GetNameTextOperation,
    command: "getNameText",
    service: System,
    request: { id: Option<String> },
    query: |req| { "id" => req.id },
    response: Value,
}

define_operation! {
    operation: GetLocationInfoOperation,
    command: "getLocationInfo",
    service: System,
    request: {},
    query: |req| {},
    response: Value,
}

define_toggle_operations! {
    service: System, param: "enable";
    SetAutoPowerStandbyOperation => "setAutoPowerStandby",
    SetHdmiOut1Operation => "setHdmiOut1",
    SetHdmiOut2Operation => "setHdmiOut2",
    SetPartyModeOperation => "setPartyMode",
}
