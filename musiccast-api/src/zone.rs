//! Zone resolution
//!
//! Callers name zones loosely: by 1-based index, by a single numeral, by
//! token, or not at all. [`Zone::resolve`] maps every accepted form onto
//! the closed set of zones the receiver knows about.

use std::fmt;
use std::str::FromStr;

use crate::operation::{QueryValue, ValidationError};

/// An independently controllable output group of the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    #[default]
    Main,
    Zone2,
    Zone3,
    Zone4,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Main, Zone::Zone2, Zone::Zone3, Zone::Zone4];

    /// Wire token used as the first path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Main => "main",
            Zone::Zone2 => "zone2",
            Zone::Zone3 => "zone3",
            Zone::Zone4 => "zone4",
        }
    }

    /// Zone for a 1-based index
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Zone::Main),
            2 => Some(Zone::Zone2),
            3 => Some(Zone::Zone3),
            4 => Some(Zone::Zone4),
            _ => None,
        }
    }

    /// Resolve any accepted zone form
    ///
    /// Absent input, `0` and `""` select `main`. Indexes and single numerals
    /// `1..=4` select by position; tokens are matched case-insensitively.
    /// Anything else is rejected.
    pub fn resolve<'a>(selector: impl Into<ZoneSelector<'a>>) -> Result<Self, ValidationError> {
        match selector.into() {
            ZoneSelector::Default | ZoneSelector::Index(0) => Ok(Zone::Main),
            ZoneSelector::Zone(zone) => Ok(zone),
            ZoneSelector::Index(index) => Self::from_index(index).ok_or_else(|| {
                ValidationError::invalid_value("zone", index, "zone index must be 1..=4")
            }),
            ZoneSelector::Name(name) => name.parse(),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Zone::Main);
        }

        if trimmed.len() == 1 {
            if let Some(zone) = trimmed
                .parse::<i64>()
                .ok()
                .and_then(|index| if index == 0 { Some(Zone::Main) } else { Zone::from_index(index) })
            {
                return Ok(zone);
            }
        }

        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::invalid_value(
                    "zone",
                    s,
                    "expected main, zone2, zone3, zone4 or an index 1..=4",
                )
            })
    }
}

impl QueryValue for Zone {
    fn to_query(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Loosely typed zone input accepted by client methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSelector<'a> {
    #[default]
    Default,
    Index(i64),
    Name(&'a str),
    Zone(Zone),
}

impl From<i32> for ZoneSelector<'_> {
    fn from(index: i32) -> Self {
        ZoneSelector::Index(index as i64)
    }
}

impl<'a> From<&'a str> for ZoneSelector<'a> {
    fn from(name: &'a str) -> Self {
        ZoneSelector::Name(name)
    }
}

impl<'a> From<&'a String> for ZoneSelector<'a> {
    fn from(name: &'a String) -> Self {
        ZoneSelector::Name(name.as_str())
    }
}

impl From<Zone> for ZoneSelector<'_> {
    fn from(zone: Zone) -> Self {
        ZoneSelector::Zone(zone)
    }
}

impl<'a, T: Into<ZoneSelector<'a>>> From<Option<T>> for ZoneSelector<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
