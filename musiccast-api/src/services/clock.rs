//! Clock and alarm operations under `/clock`

use crate::operation::Value;
use crate::{define_operation, define_toggle_operation};

define_operation! {
    operation: GetSettingsOperation,
    command: "getSettings",
    service: Clock,
    request: {},
    query: |req| {},
    response: Value,
}

define_toggle_operation! {
    operation: SetAutoSyncOperation,
    command: "setAutoSync",
    service: Clock,
    param: "enable",
}

define_operation! {
    operation: SetDateAndTimeOperation,
    command: "setDateAndTime",
    service: Clock,
    request: { date_time: String },
    query: |req| { "date_time" => req.date_time },
    response: Value,
}

define_operation! {
    operation: SetClockFormatOperation,
    command: "setClockFormat",
    service: Clock,
    request: { format: String },
    query: |req| { "format" => req.format },
    response: Value,
}

define_operation! {
    operation: SetAlarmSettingsOperation,
    command: "setAlarmSettings",
    service: Clock,
    request: { settings: Value },
    query: |req| {},
    method: Post,
    body: |req| req.settings.clone(),
    response: Value,
}
