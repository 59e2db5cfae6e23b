//! Operation tables, one module per path segment of the Extended Control API
//!
//! Operations are addressed through their module (`zone::SetVolumeOperation`,
//! `netusb::StorePresetOperation`) because several services share command
//! names such as `getSettings` and `getPresetInfo`.

pub mod cd;
pub mod clock;
pub mod distribution;
pub mod netusb;
pub mod playback;
pub mod system;
pub mod tuner;
pub mod zone;
