//! Normalization of loosely typed caller input
//!
//! Control surfaces hand over booleans as `true`, `1` or `"1"`, playback
//! actions as short aliases, and sleep timers as arbitrary minutes. The
//! types here turn those into the tokens the receiver accepts.

use std::fmt;

use crate::operation::QueryValue;

/// Boolean-like input
///
/// Only `true`, `"true"`, `1` and `"1"` are truthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolLike<'a> {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Text(&'a str),
}

impl BoolLike<'_> {
    pub fn is_truthy(&self) -> bool {
        match self {
            BoolLike::Bool(value) => *value,
            BoolLike::Int(value) => *value == 1,
            BoolLike::Text(value) => matches!(*value, "true" | "1"),
            BoolLike::Absent => false,
        }
    }
}

impl From<bool> for BoolLike<'_> {
    fn from(value: bool) -> Self {
        BoolLike::Bool(value)
    }
}

impl From<i32> for BoolLike<'_> {
    fn from(value: i32) -> Self {
        BoolLike::Int(value as i64)
    }
}

impl<'a> From<&'a str> for BoolLike<'a> {
    fn from(value: &'a str) -> Self {
        BoolLike::Text(value)
    }
}

impl<'a> From<&'a String> for BoolLike<'a> {
    fn from(value: &'a String) -> Self {
        BoolLike::Text(value.as_str())
    }
}

impl<'a, T: Into<BoolLike<'a>>> From<Option<T>> for BoolLike<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Receiver power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Standby,
}

impl Power {
    /// Truthy input or the literal `"on"` powers on; anything else is standby
    pub fn from_input<'a>(input: impl Into<BoolLike<'a>>) -> Self {
        match input.into() {
            BoolLike::Text("on") => Power::On,
            other if other.is_truthy() => Power::On,
            _ => Power::Standby,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Power::On => "on",
            Power::Standby => "standby",
        }
    }
}

impl QueryValue for Power {
    fn to_query(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Playback command token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playback {
    Play,
    Stop,
    Pause,
    PlayPause,
    Previous,
    Next,
    FastReverseStart,
    FastReverseEnd,
    FastForwardStart,
    FastForwardEnd,
}

impl Playback {
    pub const ALL: [Playback; 10] = [
        Playback::Play,
        Playback::Stop,
        Playback::Pause,
        Playback::PlayPause,
        Playback::Previous,
        Playback::Next,
        Playback::FastReverseStart,
        Playback::FastReverseEnd,
        Playback::FastForwardStart,
        Playback::FastForwardEnd,
    ];

    pub fn wire(&self) -> &'static str {
        match self {
            Playback::Play => "play",
            Playback::Stop => "stop",
            Playback::Pause => "pause",
            Playback::PlayPause => "play_pause",
            Playback::Previous => "previous",
            Playback::Next => "next",
            Playback::FastReverseStart => "fast_reverse_start",
            Playback::FastReverseEnd => "fast_reverse_end",
            Playback::FastForwardStart => "fast_forward_start",
            Playback::FastForwardEnd => "fast_forward_end",
        }
    }

    /// Normalize a free-form action
    ///
    /// Accepts wire names and the short fast-wind aliases. Unrecognized or
    /// empty input falls back to `play`.
    pub fn from_input(action: &str) -> Self {
        match action {
            "frw_start" => Playback::FastReverseStart,
            "frw_end" => Playback::FastReverseEnd,
            "ffw_start" => Playback::FastForwardStart,
            "ffw_end" => Playback::FastForwardEnd,
            other => Self::ALL
                .into_iter()
                .find(|playback| playback.wire() == other)
                .unwrap_or_else(|| {
                    tracing::debug!(action = other, "unrecognized playback action, using play");
                    Playback::Play
                }),
        }
    }

    /// Start or end of fast reverse
    pub fn fast_reverse(start: bool) -> Self {
        if start {
            Playback::FastReverseStart
        } else {
            Playback::FastReverseEnd
        }
    }

    /// Start or end of fast forward
    pub fn fast_forward(start: bool) -> Self {
        if start {
            Playback::FastForwardStart
        } else {
            Playback::FastForwardEnd
        }
    }
}

impl fmt::Display for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl QueryValue for Playback {
    fn to_query(&self) -> Option<String> {
        Some(self.wire().to_string())
    }
}

/// Sleep timer steps the receiver supports, in minutes
pub const SLEEP_STEPS: [u32; 5] = [0, 30, 60, 90, 120];

/// Quantize minutes down to the nearest supported sleep step
pub fn quantize_sleep(minutes: u32) -> u32 {
    SLEEP_STEPS
        .into_iter()
        .rev()
        .find(|step| minutes >= *step)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(BoolLike::Bool(true), true)]
    #[case(BoolLike::Text("true"), true)]
    #[case(BoolLike::Text("1"), true)]
    #[case(BoolLike::Int(1), true)]
    #[case(BoolLike::Bool(false), false)]
    #[case(BoolLike::Text("false"), false)]
    #[case(BoolLike::Text("0"), false)]
    #[case(BoolLike::Text("yes"), false)]
    #[case(BoolLike::Text("TRUE"), false)]
    #[case(BoolLike::Int(0), false)]
    #[case(BoolLike::Int(2), false)]
    #[case(BoolLike::Absent, false)]
    fn test_truthiness(#[case] input: BoolLike<'static>, #[case] expected: bool) {
        assert_eq!(input.is_truthy(), expected);
    }

    #[test]
    fn test_bool_like_conversions() {
        assert!(BoolLike::from(true).is_truthy());
        assert!(BoolLike::from(1).is_truthy());
        assert!(BoolLike::from("1").is_truthy());
        assert!(!BoolLike::from(None::<bool>).is_truthy());
        assert!(BoolLike::from(Some("true")).is_truthy());
    }

    #[rstest]
    #[case(BoolLike::Text("on"), Power::On)]
    #[case(BoolLike::Bool(true), Power::On)]
    #[case(BoolLike::Int(1), Power::On)]
    #[case(BoolLike::Text("1"), Power::On)]
    #[case(BoolLike::Text("off"), Power::Standby)]
    #[case(BoolLike::Text("standby"), Power::Standby)]
    #[case(BoolLike::Bool(false), Power::Standby)]
    #[case(BoolLike::Absent, Power::Standby)]
    fn test_power_input(#[case] input: BoolLike<'static>, #[case] expected: Power) {
        assert_eq!(Power::from_input(input), expected);
    }

    #[rstest]
    #[case("frw_start", Playback::FastReverseStart)]
    #[case("frw_end", Playback::FastReverseEnd)]
    #[case("ffw_start", Playback::FastForwardStart)]
    #[case("ffw_end", Playback::FastForwardEnd)]
    #[case("fast_forward_start", Playback::FastForwardStart)]
    #[case("play_pause", Playback::PlayPause)]
    #[case("previous", Playback::Previous)]
    #[case("", Playback::Play)]
    #[case("rewind", Playback::Play)]
    #[case("PAUSE", Playback::Play)]
    fn test_playback_normalization(#[case] action: &str, #[case] expected: Playback) {
        assert_eq!(Playback::from_input(action), expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(29, 0)]
    #[case(30, 30)]
    #[case(59, 30)]
    #[case(60, 60)]
    #[case(95, 90)]
    #[case(120, 120)]
    #[case(600, 120)]
    fn test_sleep_quantization(#[case] minutes: u32, #[case] expected: u32) {
        assert_eq!(quantize_sleep(minutes), expected);
    }

    proptest! {
        #[test]
        fn prop_playback_normalization_is_closed(action in ".*") {
            let playback = Playback::from_input(&action);
            prop_assert!(Playback::ALL.contains(&playback));
        }

        #[test]
        fn prop_wire_names_are_fixed_points(idx in 0usize..10) {
            let playback = Playback::ALL[idx];
            prop_assert_eq!(Playback::from_input(playback.wire()), playback);
        }

        #[test]
        fn prop_sleep_never_exceeds_input_or_cap(minutes in any::<u32>()) {
            let quantized = quantize_sleep(minutes);
            prop_assert!(SLEEP_STEPS.contains(&quantized));
            prop_assert!(quantized <= minutes.min(120));
        }
    }
}
