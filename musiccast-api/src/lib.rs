//! Typed client for the Yamaha MusicCast "Extended Control" API
//!
//! This crate maps receiver capabilities onto HTTP commands. It uses the
//! private `http-client` crate for the wire and adds:
//!
//! - zone resolution from indexes, numerals and tokens ([`Zone::resolve`])
//! - normalization of boolean-like, power and playback input ([`input`])
//! - one operation type per command, declared in table form ([`services`])
//! - typed `getStatus` / `getPlayInfo` snapshots ([`types`])
//!
//! ```rust,ignore
//! use http_client::TransportConfig;
//! use musiccast_api::{MusicCastClient, Source};
//!
//! let client = MusicCastClient::new(TransportConfig::direct("192.168.0.31"));
//! client.power_on(None::<&str>)?;
//! client.set_volume_to(40, "main")?;
//!
//! let info = client.get_play_info(Source::NetUsb)?;
//! println!("{} - {}", info.artist, info.track);
//! ```

pub mod client;
pub mod error;
pub mod input;
pub mod operation;
pub mod service;
pub mod services;
pub mod types;
pub mod zone;

pub use client::MusicCastClient;
pub use error::{ApiError, Result};
pub use input::{BoolLike, Playback, Power};
pub use operation::{Command, Method, MusicCastOperation, ValidationError};
pub use service::{Service, Source};
pub use types::{PlayInfo, PlaybackState, PowerState, RepeatMode, ShuffleMode, Status};
pub use zone::{Zone, ZoneSelector};

// Used by the operation macros
#[doc(hidden)]
pub use paste;
