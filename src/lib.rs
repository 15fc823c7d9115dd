//! playcaps - Browser media capability negotiation
//!
//! This library crate exposes configuration loading and the probe report for
//! the binary and for integration testing. Profile assembly itself lives in
//! `playcaps-profile`.

pub mod config;
pub mod report;

pub use playcaps_probe::{BrowserIdentity, Environment, ProfileOptions, StaticHost};
pub use playcaps_profile::{build_device_profile, DeviceProfile, UserSettings};
