//! Shared helpers for integration tests.
//!
//! Fixtures live under `tests/fixtures` and are regular config files, so the
//! same TOML drives both library-level and CLI-level tests.

#![allow(dead_code)]

use std::path::PathBuf;

use playcaps::config::{self, Config};
use playcaps::{build_device_profile, DeviceProfile};
use playcaps_profile::DirectPlayProfile;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Load and validate a fixture config.
pub fn load_fixture(name: &str) -> Config {
    config::load_config(&fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to load fixture {name}: {e:#}"))
}

/// Build the profile a fixture describes.
pub fn build(config: &Config) -> DeviceProfile {
    build_device_profile(&config.environment(), &config.settings, &config.options)
}

pub fn direct_play<'a>(profile: &'a DeviceProfile, container: &str) -> Option<&'a DirectPlayProfile> {
    profile
        .direct_play_profiles
        .iter()
        .find(|p| p.container == container)
}

/// Split a comma-separated codec field.
pub fn codecs(field: Option<&str>) -> Vec<&str> {
    field
        .unwrap_or_default()
        .split(',')
        .filter(|c| !c.is_empty())
        .collect()
}
