use std::fmt;
use std::str::FromStr;

use crate::operation::{QueryValue, ValidationError};

/// Fixed, non-zone path segments of the Extended Control API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    NetUsb,
    Cd,
    Tuner,
    System,
    Clock,
    Distribution,
}

impl Service {
    pub fn path(&self) -> &'static str {
        match self {
            Service::NetUsb => "netusb",
            Service::Cd => "cd",
            Service::Tuner => "tuner",
            Service::System => "system",
            Service::Clock => "clock",
            Service::Distribution => "dist",
        }
    }
}

/// A playback source; play-info and transport controls belong to one of
/// these rather than to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    #[default]
    NetUsb,
    Cd,
    Tuner,
}

impl Source {
    pub fn path(&self) -> &'static str {
        self.service().path()
    }

    pub fn service(&self) -> Service {
        match self {
            Source::NetUsb => Service::NetUsb,
            Source::Cd => Service::Cd,
            Source::Tuner => Service::Tuner,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Source {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "netusb" => Ok(Source::NetUsb),
            "cd" => Ok(Source::Cd),
            "tuner" => Ok(Source::Tuner),
            _ => Err(ValidationError::invalid_value(
                "source",
                s,
                "expected netusb, cd or tuner",
            )),
        }
    }
}

impl QueryValue for Source {
    fn to_query(&self) -> Option<String> {
        Some(self.path().to_string())
    }
}
