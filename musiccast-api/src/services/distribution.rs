//! Multi-room distribution operations under `/dist`

use serde_json::json;

use crate::define_operation;
use crate::operation::Value;

define_operation! {
    operation: GetDistributionInfoOperation,
    command: "getDistributionInfo",
    service: Distribution,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: SetServerInfoOperation,
    command: "setServerInfo",
    service: Distribution,
    request: { info: Value },
    query: |req| {},
    method: Post,
    body: |req| req.info.clone(),
    response: Value,
}

define_operation! {
    operation: SetClientInfoOperation,
    command: "setClientInfo",
    service: Distribution,
    request: { info: Value },
    query: |req| {},
    method: Post,
    body: |req| req.info.clone(),
    response: Value,
}

define_operation! {
    operation: StartDistributionOperation,
    command: "startDistribution",
    service: Distribution,
    request: { num: u32 },
    query: |req| { "num" => req.num },
    response: Value,
}

define_operation! {
    operation: StopDistributionOperation,
    command: "stopDistribution",
    service: Distribution,
    request: {},
    query: |req| {},
    response: Value,
}

define_operation! {
    operation: SetGroupNameOperation,
    command: "setGroupName",
    service: Distribution,
    request: { name: String },
    query: |req| {},
    method: Post,
    body: |req| json!({ "name": req.name }),
    response: Value,
}
