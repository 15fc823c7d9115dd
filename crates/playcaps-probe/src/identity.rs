//! Runtime identity of the host browser or device.
//!
//! A [`BrowserIdentity`] is derived from the user agent and platform globals by
//! the embedding application. Probes only read it; the flags are trusted to be
//! mutually consistent and are never validated here.

use serde::{Deserialize, Serialize};

/// Browser family, platform and version flags.
///
/// Version fields are `None` when the runtime did not report one. Every
/// comparison helper returns `false` for an absent version, in both
/// directions, so "Tizen below 6.5" is false on a non-Tizen browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserIdentity {
    // Browser engines and families
    pub chrome: bool,
    /// Legacy (EdgeHTML) Edge.
    pub edge: bool,
    pub edge_chromium: bool,
    /// EdgeHTML running as a UWP app (Xbox, Windows shell).
    pub edge_uwp: bool,
    pub firefox: bool,
    pub safari: bool,
    pub opera: bool,

    // Operating systems
    pub android: bool,
    pub ios: bool,
    pub osx: bool,
    pub windows: bool,
    pub iphone: bool,
    pub ipod: bool,
    pub ipad: bool,

    // Form factor
    pub mobile: bool,
    pub tv: bool,

    // TV and console platforms
    /// Samsung Tizen.
    pub tizen: bool,
    /// LG webOS.
    pub web0s: bool,
    /// Hisense VIDAA.
    pub vidaa: bool,
    pub ps4: bool,
    pub xbox_one: bool,

    // Versions
    pub version_major: Option<u32>,
    pub ios_version: Option<f64>,
    pub tizen_version: Option<f64>,
    pub web0s_version: Option<f64>,

    /// Explicit opt-out of HLS audio transcoding; `None` means enabled.
    pub enable_hls_audio: Option<bool>,
}

impl BrowserIdentity {
    /// Major browser version is known and at least `v`.
    pub fn version_at_least(&self, v: u32) -> bool {
        self.version_major.is_some_and(|major| major >= v)
    }

    /// Major browser version is known and below `v`.
    pub fn version_below(&self, v: u32) -> bool {
        self.version_major.is_some_and(|major| major < v)
    }

    pub fn ios_at_least(&self, v: f64) -> bool {
        self.ios_version.is_some_and(|ios| ios >= v)
    }

    pub fn ios_below(&self, v: f64) -> bool {
        self.ios_version.is_some_and(|ios| ios < v)
    }

    pub fn tizen_at_least(&self, v: f64) -> bool {
        self.tizen_version.is_some_and(|tizen| tizen >= v)
    }

    pub fn tizen_below(&self, v: f64) -> bool {
        self.tizen_version.is_some_and(|tizen| tizen < v)
    }

    pub fn web0s_at_least(&self, v: f64) -> bool {
        self.web0s_version.is_some_and(|web0s| web0s >= v)
    }

    pub fn web0s_below(&self, v: f64) -> bool {
        self.web0s_version.is_some_and(|web0s| web0s < v)
    }

    /// Tizen, webOS or an EdgeHTML UWP shell: the platforms whose native
    /// players accept most legacy containers and codecs.
    pub fn is_legacy_media_platform(&self) -> bool {
        self.tizen || self.web0s || self.edge_uwp
    }

    /// iOS or macOS, whose native HLS players need two segments up front.
    pub fn is_apple_os(&self) -> bool {
        self.ios || self.osx
    }

    pub fn hls_audio_enabled(&self) -> bool {
        self.enable_hls_audio != Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_version_compares_false_both_ways() {
        let identity = BrowserIdentity::default();
        assert!(!identity.version_at_least(1));
        assert!(!identity.version_below(200));
        assert!(!identity.tizen_at_least(3.0));
        assert!(!identity.tizen_below(6.5));
        assert!(!identity.web0s_below(23.0));
        assert!(!identity.ios_below(11.0));
    }

    #[test]
    fn test_version_thresholds() {
        let identity = BrowserIdentity {
            safari: true,
            version_major: Some(17),
            ..Default::default()
        };
        assert!(identity.version_at_least(17));
        assert!(!identity.version_at_least(18));
        assert!(identity.version_below(18));
        assert!(!identity.version_below(17));

        let tv = BrowserIdentity {
            tizen: true,
            tizen_version: Some(5.5),
            ..Default::default()
        };
        assert!(tv.tizen_at_least(5.5));
        assert!(tv.tizen_below(6.5));
        assert!(!tv.tizen_at_least(6.0));
    }

    #[test]
    fn test_hls_audio_defaults_to_enabled() {
        let mut identity = BrowserIdentity::default();
        assert!(identity.hls_audio_enabled());
        identity.enable_hls_audio = Some(true);
        assert!(identity.hls_audio_enabled());
        identity.enable_hls_audio = Some(false);
        assert!(!identity.hls_audio_enabled());
    }

    #[test]
    fn test_deserialize_rejects_unknown_flags() {
        let identity: BrowserIdentity =
            toml::from_str("chrome = true\nversion_major = 120\n").unwrap();
        assert!(identity.chrome);
        assert_eq!(identity.version_major, Some(120));

        let err = toml::from_str::<BrowserIdentity>("netscape = true\n");
        assert!(err.is_err());
    }
}
