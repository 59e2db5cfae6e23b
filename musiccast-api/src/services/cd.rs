//! CD drive operations under `/cd`
//!
//! Playback, repeat and shuffle go through [`playback`](super::playback)
//! with [`Source::Cd`](crate::Source::Cd).

use crate::define_operation;
use crate::operation::Value;

define_operation! {
    operation: ToggleTrayOperation,
    command: "toggleTray",
    service: Cd,
    request: {},
    query: |req| {},
    response: Value,
}
